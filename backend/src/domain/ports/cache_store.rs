//! Port for the shared key-value store behind the geo cache.
use std::time::Duration;

use async_trait::async_trait;

use super::{GeoCacheKey, define_port_error};

define_port_error! {
    /// Errors surfaced by the cache store adapter.
    pub enum CacheStoreError {
        /// Store is unavailable or timing out.
        Backend => backend, "cache store backend failure: {message}",
    }
}

/// Minimal string store with per-key expiry.
///
/// `get` folds the existence check and the read into one call so a key
/// expiring between the two cannot be observed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent or expired.
    async fn get(&self, key: &GeoCacheKey) -> Result<Option<String>, CacheStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &GeoCacheKey, value: &str) -> Result<(), CacheStoreError>;

    /// Expire `key` after `ttl`.
    async fn expire(&self, key: &GeoCacheKey, ttl: Duration) -> Result<(), CacheStoreError>;
}

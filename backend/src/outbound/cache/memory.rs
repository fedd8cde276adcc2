//! Process-local [`CacheStore`] with per-key expiry.
//!
//! Expiry uses `tokio::time::Instant`, so paused-clock tests can advance
//! past a TTL without sleeping.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::domain::ports::{CacheStore, CacheStoreError, GeoCacheKey};

#[derive(Debug)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|deadline| now < deadline)
    }
}

/// Mutex-guarded map implementing the cache store port.
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Entry>>, CacheStoreError> {
        self.entries
            .lock()
            .map_err(|_| CacheStoreError::backend("in-memory cache lock poisoned"))
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .map(|entries| entries.values().filter(|entry| entry.is_live(now)).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &GeoCacheKey) -> Result<Option<String>, CacheStoreError> {
        let now = Instant::now();
        let mut entries = self.lock()?;
        match entries.get(key.as_str()) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key.as_str());
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &GeoCacheKey, value: &str) -> Result<(), CacheStoreError> {
        self.lock()?.insert(
            key.as_str().to_owned(),
            Entry {
                value: value.to_owned(),
                expires_at: None,
            },
        );
        Ok(())
    }

    async fn expire(&self, key: &GeoCacheKey, ttl: Duration) -> Result<(), CacheStoreError> {
        if let Some(entry) = self.lock()?.get_mut(key.as_str()) {
            entry.expires_at = Some(Instant::now() + ttl);
        }
        Ok(())
    }
}

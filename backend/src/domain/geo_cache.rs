//! Geohash-bucketed cache of restaurant snapshots.
//!
//! Keys are precision-7 geohash cells, values are JSON arrays of
//! [`Restaurant`] records. The store is optional: a disabled cache reports
//! every read as a miss and accepts writes as no-ops.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use super::GeoPoint;
use super::Restaurant;
use super::ports::{CacheStore, GeoCacheKey};

/// Snapshot lifetime used when none is configured.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Failures surfaced by [`GeoCache`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoCacheError {
    /// A stored snapshot could not be decoded.
    #[error("cached snapshot under {key} is corrupt: {message}")]
    CorruptSnapshot { key: String, message: String },
    /// Records could not be encoded for storage.
    #[error("failed to encode snapshot: {message}")]
    Serialization { message: String },
    /// The backing store rejected a write.
    #[error("cache store write failed: {message}")]
    Backend { message: String },
}

/// Read-through cache of nearby restaurants keyed by geohash cell.
#[derive(Clone)]
pub struct GeoCache {
    store: Option<Arc<dyn CacheStore>>,
    ttl: Duration,
}

impl GeoCache {
    /// Cache backed by `store`, expiring entries after `ttl`.
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            store: Some(store),
            ttl,
        }
    }

    /// Cache without a backing store.
    pub fn disabled() -> Self {
        Self {
            store: None,
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up the snapshot for the cell containing `point`.
    ///
    /// Returns `Ok(None)` on a miss, when the cache is disabled, or when the
    /// store cannot be reached. A snapshot that fails to decode is an error.
    pub async fn get(&self, point: &GeoPoint) -> Result<Option<Vec<Restaurant>>, GeoCacheError> {
        let Some(store) = &self.store else {
            return Ok(None);
        };
        let key = match GeoCacheKey::for_point(point) {
            Ok(key) => key,
            Err(error) => {
                warn!(%error, "geo cache key derivation failed; treating as miss");
                return Ok(None);
            }
        };

        let raw = match store.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %key, "geo cache miss");
                return Ok(None);
            }
            Err(error) => {
                warn!(key = %key, %error, "geo cache read failed; treating as miss");
                return Ok(None);
            }
        };

        let records: Vec<Restaurant> =
            serde_json::from_str(&raw).map_err(|err| GeoCacheError::CorruptSnapshot {
                key: key.to_string(),
                message: err.to_string(),
            })?;
        debug!(key = %key, count = records.len(), "geo cache hit");
        Ok(Some(records))
    }

    /// Store `records` for the cell containing `point`, replacing any
    /// existing snapshot and resetting its expiry.
    pub async fn put(&self, point: &GeoPoint, records: &[Restaurant]) -> Result<(), GeoCacheError> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        let key = GeoCacheKey::for_point(point).map_err(|err| GeoCacheError::Backend {
            message: err.to_string(),
        })?;
        let payload = serde_json::to_string(records).map_err(|err| {
            GeoCacheError::Serialization {
                message: err.to_string(),
            }
        })?;

        store
            .set(&key, &payload)
            .await
            .map_err(|err| GeoCacheError::Backend {
                message: err.to_string(),
            })?;
        store
            .expire(&key, self.ttl)
            .await
            .map_err(|err| GeoCacheError::Backend {
                message: err.to_string(),
            })?;
        debug!(key = %key, count = records.len(), ttl_secs = self.ttl.as_secs(), "geo cache populated");
        Ok(())
    }
}

impl std::fmt::Debug for GeoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoCache")
            .field("enabled", &self.is_enabled())
            .field("ttl", &self.ttl)
            .finish()
    }
}

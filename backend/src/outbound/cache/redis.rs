//! Redis-backed [`CacheStore`] using a `bb8-redis` connection pool.

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::{RedisConnectionManager, bb8, redis};
use tracing::debug;

use crate::domain::ports::{CacheStore, CacheStoreError, GeoCacheKey};

/// Errors raised while building the Redis pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CachePoolError {
    /// The connection URL was rejected.
    #[error("invalid redis url: {message}")]
    Url { message: String },
    /// The pool could not be built.
    #[error("failed to build redis pool: {message}")]
    Build { message: String },
}

/// Configuration for the Redis connection pool.
///
/// # Example
///
/// ```ignore
/// let config = CachePoolConfig::new("redis://127.0.0.1:6379")
///     .with_max_size(16)
///     .with_connection_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct CachePoolConfig {
    redis_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl CachePoolConfig {
    /// Defaults to 8 connections and a 2 second checkout timeout.
    pub fn new(redis_url: impl Into<String>) -> Self {
        Self {
            redis_url: redis_url.into(),
            max_size: 8,
            connection_timeout: Duration::from_secs(2),
        }
    }

    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }
}

/// Cache store issuing `GET`, `SET` and `EXPIRE` against Redis.
#[derive(Clone)]
pub struct RedisCacheStore {
    pool: bb8::Pool<RedisConnectionManager>,
}

impl RedisCacheStore {
    /// Build the pool. Connections are established lazily, so an
    /// unreachable server surfaces on first use rather than here.
    pub async fn connect(config: &CachePoolConfig) -> Result<Self, CachePoolError> {
        let manager =
            RedisConnectionManager::new(config.redis_url()).map_err(|err| CachePoolError::Url {
                message: err.to_string(),
            })?;
        let pool = bb8::Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| CachePoolError::Build {
                message: err.to_string(),
            })?;
        Ok(Self { pool })
    }

    async fn connection(
        &self,
    ) -> Result<bb8::PooledConnection<'_, RedisConnectionManager>, CacheStoreError> {
        self.pool
            .get()
            .await
            .map_err(|err| CacheStoreError::backend(format!("redis checkout failed: {err}")))
    }
}

fn command_error(command: &str, err: redis::RedisError) -> CacheStoreError {
    CacheStoreError::backend(format!("redis {command} failed: {err}"))
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &GeoCacheKey) -> Result<Option<String>, CacheStoreError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = redis::cmd("GET")
            .arg(key.as_str())
            .query_async(&mut *conn)
            .await
            .map_err(|err| command_error("GET", err))?;
        Ok(value)
    }

    async fn set(&self, key: &GeoCacheKey, value: &str) -> Result<(), CacheStoreError> {
        let mut conn = self.connection().await?;
        let _: () = redis::cmd("SET")
            .arg(key.as_str())
            .arg(value)
            .query_async(&mut *conn)
            .await
            .map_err(|err| command_error("SET", err))?;
        Ok(())
    }

    async fn expire(&self, key: &GeoCacheKey, ttl: Duration) -> Result<(), CacheStoreError> {
        let mut conn = self.connection().await?;
        let applied: bool = redis::cmd("EXPIRE")
            .arg(key.as_str())
            .arg(ttl.as_secs().max(1))
            .query_async(&mut *conn)
            .await
            .map_err(|err| command_error("EXPIRE", err))?;
        if !applied {
            debug!(key = %key, "EXPIRE targeted a missing key");
        }
        Ok(())
    }
}

impl std::fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheStore").finish_non_exhaustive()
    }
}

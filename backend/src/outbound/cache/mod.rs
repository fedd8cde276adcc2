//! Cache store adapters backing the geo cache.
//!
//! - **redis**: shared store reached through a `bb8-redis` pool
//! - **memory**: process-local store for tests and single-node runs

mod memory;
mod redis;

pub use memory::InMemoryCacheStore;
pub use redis::{CachePoolConfig, CachePoolError, RedisCacheStore};

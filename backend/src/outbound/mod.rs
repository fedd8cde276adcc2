//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing concrete
//! implementations of domain port traits:
//!
//! - **cache**: Redis-backed and in-memory cache stores for the geo cache
//! - **catalogue**: in-memory document catalogue seeded from JSON, plus a
//!   latency-simulating decorator
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod cache;
pub mod catalogue;

//! Redis cache backend implementation.
//!
//! Provides a distributed cache using Redis for multi-instance deployments,
//! with connection pooling via the connection manager and per-key TTLs.

mod cache;
mod error;

pub use cache::RedisCache;

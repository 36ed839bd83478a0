use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic cache backend operations.
///
/// Values are opaque serialized payloads; per-key operations are assumed
/// atomic at the backend, but nothing coordinates across keys.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key. Deleting an absent key is not
    /// an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

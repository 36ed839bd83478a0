//! In-memory cache implementation with LRU eviction.
//!
//! Thread-safe cache with TTL support using tokio synchronization primitives
//! and an LRU eviction policy to bound memory usage. Expiration is lazy:
//! expired entries are reported as absent on access and eventually pushed out
//! by the LRU policy.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use billsync_core::cache::{CacheBackend, Result};

/// A single cache entry with optional expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    /// Creates a new cache entry with optional TTL.
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    /// Returns true if this entry has expired.
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() > exp)
    }
}

/// In-memory cache backend with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache with LRU eviction.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Maximum number of entries before LRU eviction kicks in.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(entry) if entry.is_expired() => Ok(None),
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.pop(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get_roundtrip() {
        let cache = MemoryCache::new(16);

        cache.set("client_1", b"payload", None).await.unwrap();

        let value = cache.get("client_1").await.unwrap();
        assert_eq!(value.as_deref(), Some(b"payload".as_slice()));
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let cache = MemoryCache::new(16);

        let value = cache.get("missing").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let cache = MemoryCache::new(16);

        cache.set("client_1", b"payload", None).await.unwrap();
        cache.delete("client_1").await.unwrap();

        assert_eq!(cache.get("client_1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_ok() {
        let cache = MemoryCache::new(16);
        assert!(cache.delete("missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_entry_is_absent() {
        let cache = MemoryCache::new(16);

        cache
            .set("client_1", b"payload", Some(Duration::from_millis(10)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.get("client_1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unexpired_entry_survives() {
        let cache = MemoryCache::new(16);

        cache
            .set("client_1", b"payload", Some(Duration::from_secs(60)))
            .await
            .unwrap();

        assert!(cache.get("client_1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_lru_evicts_oldest_entry() {
        let cache = MemoryCache::new(2);

        cache.set("a", b"1", None).await.unwrap();
        cache.set("b", b"2", None).await.unwrap();
        cache.set("c", b"3", None).await.unwrap();

        assert_eq!(cache.get("a").await.unwrap(), None);
        assert!(cache.get("b").await.unwrap().is_some());
        assert!(cache.get("c").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_set_overwrites_value() {
        let cache = MemoryCache::new(16);

        cache.set("client_1", b"old", None).await.unwrap();
        cache.set("client_1", b"new", None).await.unwrap();

        let value = cache.get("client_1").await.unwrap();
        assert_eq!(value.as_deref(), Some(b"new".as_slice()));
    }
}

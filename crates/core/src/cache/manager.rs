//! Generic cache-aside manager over one entity kind's key namespace.
//!
//! An [`EntityCacheManager`] binds a cache backend to a key prefix and a TTL
//! and offers get-or-populate and set/remove operations for single entities
//! (`{prefix}_{id}`) and for the full collection snapshot (`{prefix}_all`).
//!
//! Two rules shape every operation:
//!
//! - **Loader-on-miss**: reads only invoke the supplied loader when the key
//!   is absent or empty, and a failed loader writes nothing (no negative
//!   caching).
//! - **Remove-then-write**: overwrites delete the key before writing, so the
//!   key is either absent or holding the new value, never the old one.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::keys::{all_key, id_key};
use super::serialization::{deserialize_value, serialize_value};
use super::traits::CacheBackend;
use super::CacheError;

/// Default time-to-live for cache entries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Cache-aside manager for one entity kind's external representation.
pub struct EntityCacheManager<T> {
    backend: Arc<dyn CacheBackend>,
    prefix: String,
    ttl: Duration,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EntityCacheManager<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a manager bound to `prefix`, expiring entries after `ttl`
    /// (5 minutes when not given).
    pub fn new(
        backend: Arc<dyn CacheBackend>,
        prefix: impl Into<String>,
        ttl: Option<Duration>,
    ) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
            ttl: ttl.unwrap_or(DEFAULT_TTL),
            _marker: PhantomData,
        }
    }

    /// Returns the cached value at `{prefix}_{id}`, or invokes `loader`,
    /// stores its result, and returns it.
    ///
    /// The loader's error type only has to absorb [`CacheError`], so service
    /// errors pass through unchanged.
    pub async fn get_by_id<E, F, Fut>(&self, id: i64, loader: F) -> Result<T, E>
    where
        E: From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.get_or_load(&id_key(&self.prefix, id), loader).await
    }

    /// Overwrites `{prefix}_{id}` with `value`.
    pub async fn set_by_id(&self, id: i64, value: &T) -> Result<(), CacheError> {
        self.overwrite(&id_key(&self.prefix, id), value).await
    }

    /// Deletes `{prefix}_{id}`; absent keys are not an error.
    pub async fn remove_by_id(&self, id: i64) -> Result<(), CacheError> {
        self.backend.delete(&id_key(&self.prefix, id)).await
    }

    /// Returns the cached collection snapshot at `{prefix}_all`, or invokes
    /// `loader`, stores its result, and returns it.
    pub async fn get_all<E, F, Fut>(&self, loader: F) -> Result<Vec<T>, E>
    where
        E: From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        self.get_or_load(&all_key(&self.prefix), loader).await
    }

    /// Overwrites `{prefix}_all` with the full collection snapshot.
    pub async fn set_all(&self, values: &[T]) -> Result<(), CacheError> {
        self.overwrite(&all_key(&self.prefix), &values).await
    }

    /// Deletes `{prefix}_all`; absent keys are not an error.
    pub async fn remove_all(&self) -> Result<(), CacheError> {
        self.backend.delete(&all_key(&self.prefix)).await
    }

    async fn get_or_load<V, E, F, Fut>(&self, key: &str, loader: F) -> Result<V, E>
    where
        V: Serialize + DeserializeOwned,
        E: From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(bytes) = self.backend.get(key).await.map_err(E::from)? {
            // An empty payload is a miss. A non-empty payload is
            // authoritative: a decode failure propagates, the loader does
            // not re-run over held bytes.
            if !bytes.is_empty() {
                tracing::trace!(key, "cache hit");
                return deserialize_value(&bytes)
                    .map_err(CacheError::from)
                    .map_err(E::from);
            }
        }

        tracing::trace!(key, "cache miss");
        let value = loader().await?;

        let bytes = serialize_value(&value)
            .map_err(CacheError::from)
            .map_err(E::from)?;
        self.backend
            .set(key, &bytes, Some(self.ttl))
            .await
            .map_err(E::from)?;

        Ok(value)
    }

    async fn overwrite<V: Serialize>(&self, key: &str, value: &V) -> Result<(), CacheError> {
        // Delete first: if serialization fails midway the key is absent, not
        // holding the previous value.
        self.backend.delete(key).await?;

        let bytes = serialize_value(value)?;
        self.backend.set(key, &bytes, Some(self.ttl)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    use serde::Deserialize;

    use super::super::Result as CacheResult;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        id: i64,
        label: String,
    }

    fn widget(id: i64, label: &str) -> Widget {
        Widget {
            id,
            label: label.to_string(),
        }
    }

    /// Mock backend storing raw bytes, inspectable by tests.
    struct MockBackend {
        store: RwLock<HashMap<String, Vec<u8>>>,
    }

    impl MockBackend {
        fn new() -> Self {
            Self {
                store: RwLock::new(HashMap::new()),
            }
        }

        async fn contains(&self, key: &str) -> bool {
            self.store.read().await.contains_key(key)
        }

        async fn put_raw(&self, key: &str, bytes: &[u8]) {
            self.store
                .write()
                .await
                .insert(key.to_string(), bytes.to_vec());
        }
    }

    #[async_trait::async_trait]
    impl CacheBackend for MockBackend {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            Ok(self.store.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            self.store
                .write()
                .await
                .insert(key.to_string(), value.to_vec());
            Ok(())
        }

        async fn delete(&self, key: &str) -> CacheResult<()> {
            self.store.write().await.remove(key);
            Ok(())
        }
    }

    fn manager(backend: Arc<MockBackend>) -> EntityCacheManager<Widget> {
        EntityCacheManager::new(backend, "widget", Some(Duration::from_secs(300)))
    }

    #[tokio::test]
    async fn test_miss_invokes_loader_once_and_stores() {
        let backend = Arc::new(MockBackend::new());
        let cache = manager(backend.clone());
        let calls = &AtomicUsize::new(0);

        let value = cache
            .get_by_id(1, || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, CacheError>(widget(1, "gear"))
            })
            .await
            .unwrap();

        assert_eq!(value, widget(1, "gear"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(backend.contains("widget_1").await);
    }

    #[tokio::test]
    async fn test_hit_does_not_invoke_loader() {
        let backend = Arc::new(MockBackend::new());
        let cache = manager(backend.clone());

        cache.set_by_id(1, &widget(1, "gear")).await.unwrap();

        // A loader error would surface if the loader ran on a hit.
        let value = cache
            .get_by_id(1, || async move {
                Err::<Widget, _>(CacheError::OperationFailed(
                    "loader ran on a cache hit".to_string(),
                ))
            })
            .await
            .unwrap();

        assert_eq!(value, widget(1, "gear"));
    }

    #[tokio::test]
    async fn test_failed_loader_writes_nothing() {
        let backend = Arc::new(MockBackend::new());
        let cache = manager(backend.clone());

        let result = cache
            .get_by_id(9, || async move {
                Err::<Widget, _>(CacheError::OperationFailed("loader failed".to_string()))
            })
            .await;

        assert!(result.is_err());
        assert!(!backend.contains("widget_9").await);
    }

    #[tokio::test]
    async fn test_empty_payload_is_a_miss() {
        let backend = Arc::new(MockBackend::new());
        backend.put_raw("widget_3", b"").await;
        let cache = manager(backend.clone());

        let calls = &AtomicUsize::new(0);
        let value = cache
            .get_by_id(3, || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, CacheError>(widget(3, "bolt"))
            })
            .await
            .unwrap();

        assert_eq!(value, widget(3, "bolt"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_corrupt_payload_propagates() {
        let backend = Arc::new(MockBackend::new());
        backend.put_raw("widget_4", b"not json").await;
        let cache = manager(backend.clone());

        let result = cache
            .get_by_id(4, || async move {
                Err::<Widget, _>(CacheError::OperationFailed(
                    "loader ran over held bytes".to_string(),
                ))
            })
            .await;

        assert!(matches!(result, Err(CacheError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value_wholesale() {
        let backend = Arc::new(MockBackend::new());
        let cache = manager(backend.clone());

        cache.set_by_id(1, &widget(1, "old")).await.unwrap();
        cache.set_by_id(1, &widget(1, "new")).await.unwrap();

        let value = cache
            .get_by_id(1, || async move {
                Err::<Widget, _>(CacheError::OperationFailed(
                    "value should be cached".to_string(),
                ))
            })
            .await
            .unwrap();

        assert_eq!(value, widget(1, "new"));
    }

    #[tokio::test]
    async fn test_remove_by_id_forces_reload() {
        let backend = Arc::new(MockBackend::new());
        let cache = manager(backend.clone());

        cache.set_by_id(1, &widget(1, "gear")).await.unwrap();
        cache.remove_by_id(1).await.unwrap();
        assert!(!backend.contains("widget_1").await);

        let calls = &AtomicUsize::new(0);
        cache
            .get_by_id(1, || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, CacheError>(widget(1, "gear"))
            })
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_ok() {
        let backend = Arc::new(MockBackend::new());
        let cache = manager(backend);

        assert!(cache.remove_by_id(404).await.is_ok());
        assert!(cache.remove_all().await.is_ok());
    }

    #[tokio::test]
    async fn test_get_all_miss_stores_snapshot() {
        let backend = Arc::new(MockBackend::new());
        let cache = manager(backend.clone());

        let calls = &AtomicUsize::new(0);
        let values = cache
            .get_all(|| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, CacheError>(vec![widget(1, "gear"), widget(2, "bolt")])
            })
            .await
            .unwrap();

        assert_eq!(values.len(), 2);
        assert!(backend.contains("widget_all").await);

        // Second read hits the snapshot.
        let values = cache
            .get_all(|| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, CacheError>(vec![])
            })
            .await
            .unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_set_all_overwrites_snapshot() {
        let backend = Arc::new(MockBackend::new());
        let cache = manager(backend.clone());

        cache.set_all(&[widget(1, "gear")]).await.unwrap();
        cache
            .set_all(&[widget(1, "gear"), widget(2, "bolt")])
            .await
            .unwrap();

        let values = cache
            .get_all(|| async move {
                Err::<Vec<Widget>, _>(CacheError::OperationFailed(
                    "snapshot should be cached".to_string(),
                ))
            })
            .await
            .unwrap();

        assert_eq!(values, vec![widget(1, "gear"), widget(2, "bolt")]);
    }

    #[tokio::test]
    async fn test_remove_all_deletes_snapshot() {
        let backend = Arc::new(MockBackend::new());
        let cache = manager(backend.clone());

        cache.set_all(&[widget(1, "gear")]).await.unwrap();
        cache.remove_all().await.unwrap();

        assert!(!backend.contains("widget_all").await);
    }
}

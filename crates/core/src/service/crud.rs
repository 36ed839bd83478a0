//! Generic cache-aware CRUD orchestration.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::cache::{CacheBackend, EntityCacheManager};
use crate::storage::Repository;

use super::entity::Entity;
use super::error::{Result, ServiceError};
use super::warm::CacheWarmable;

/// Cache-aware CRUD service for one entity kind.
///
/// Reads go through the cache manager and populate it on miss; writes persist
/// to the repository first and then republish the per-id entry and the full
/// collection snapshot. Cache writes after a successful durable write are
/// best-effort: a failure is logged at `warn` and the operation still
/// succeeds. The store is authoritative; the TTL bounds cache staleness.
///
/// Nothing synchronizes concurrent writers: both may persist and then rewrite
/// the `{prefix}_all` snapshot, and the interleaving decides which snapshot
/// stays visible until the next write or TTL expiry. The store always holds
/// the true last write.
pub struct EntityService<E: Entity> {
    repository: Arc<dyn Repository<E>>,
    cache: EntityCacheManager<E::Response>,
}

impl<E: Entity> EntityService<E> {
    /// Creates a service over the given repository and cache backend, with
    /// cache entries expiring after `ttl` (5 minutes when not given).
    pub fn new(
        repository: Arc<dyn Repository<E>>,
        backend: Arc<dyn CacheBackend>,
        ttl: Option<Duration>,
    ) -> Self {
        Self {
            repository,
            cache: EntityCacheManager::new(backend, E::CACHE_PREFIX, ttl),
        }
    }

    /// Returns the full collection, cache-first.
    ///
    /// An empty repository is reported as `NotFound` rather than an empty
    /// list. Deliberate policy, exercised by tests.
    pub async fn get_all(&self) -> Result<Vec<E::Response>> {
        self.cache
            .get_all(|| async move {
                let entities = self.repository.find_all().await?;
                if entities.is_empty() {
                    return Err(ServiceError::NotFound(format!(
                        "No {} found",
                        E::PLURAL.to_lowercase()
                    )));
                }
                Ok(entities.iter().map(E::to_response).collect())
            })
            .await
    }

    /// Returns one entity by id, cache-first.
    pub async fn get_by_id(&self, id: i64) -> Result<E::Response> {
        self.cache
            .get_by_id(id, || async move {
                match self.repository.find_by_id(id).await? {
                    Some(entity) => Ok(entity.to_response()),
                    None => Err(not_found::<E>(id)),
                }
            })
            .await
    }

    /// Validates and persists a new entity, then republishes the cache.
    ///
    /// Validation failures occur before any repository or cache interaction.
    pub async fn create(&self, request: E::Request) -> Result<E::Response> {
        E::validate(&request)?;

        let saved = self.repository.save(E::from_request(request)).await?;
        tracing::debug!(entity = E::NAME, id = saved.id(), "created");

        let response = saved.to_response();
        self.republish(&response).await;
        Ok(response)
    }

    /// Validates the request, overwrites the existing entity's mutable
    /// fields, persists, and republishes the cache.
    pub async fn update(&self, id: i64, request: E::Request) -> Result<E::Response> {
        E::validate(&request)?;

        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<E>(id))?;
        existing.apply_request(request);

        let updated = self.repository.save(existing).await?;
        tracing::debug!(entity = E::NAME, id, "updated");

        let response = updated.to_response();
        self.republish(&response).await;
        Ok(response)
    }

    /// Deletes an existing entity, drops its cache entry, and republishes the
    /// collection snapshot.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found::<E>(id));
        }

        self.repository.delete_by_id(id).await?;
        tracing::debug!(entity = E::NAME, id, "deleted");

        if let Err(err) = self.cache.remove_by_id(id).await {
            tracing::warn!(entity = E::NAME, id, error = %err, "failed to drop cache entry after delete");
        }
        self.republish_all().await;
        Ok(())
    }

    /// Reloads every entity into the cache (collection snapshot plus one
    /// entry per id) and returns the refreshed count. Unlike the write paths,
    /// cache failures here propagate: a warm-up that cannot write has failed.
    pub async fn refresh_cache(&self) -> Result<usize> {
        let responses = self.snapshot().await?;

        self.cache.set_all(&responses).await?;
        for response in &responses {
            self.cache
                .set_by_id(E::response_id(response), response)
                .await?;
        }

        tracing::debug!(entity = E::NAME, count = responses.len(), "cache refreshed");
        Ok(responses.len())
    }

    /// Best-effort cache republication after a durable write: the per-id
    /// entry, then the recomputed collection snapshot.
    async fn republish(&self, response: &E::Response) {
        if let Err(err) = self
            .cache
            .set_by_id(E::response_id(response), response)
            .await
        {
            tracing::warn!(entity = E::NAME, error = %err, "failed to cache entry after write");
        }
        self.republish_all().await;
    }

    /// Recomputes the collection snapshot from the repository and overwrites
    /// `{prefix}_all`, logging instead of failing.
    async fn republish_all(&self) {
        match self.snapshot().await {
            Ok(responses) => {
                if let Err(err) = self.cache.set_all(&responses).await {
                    tracing::warn!(entity = E::NAME, error = %err, "failed to cache collection snapshot");
                }
            }
            Err(err) => {
                tracing::warn!(entity = E::NAME, error = %err, "failed to rebuild collection snapshot");
            }
        }
    }

    async fn snapshot(&self) -> Result<Vec<E::Response>> {
        let entities = self.repository.find_all().await?;
        Ok(entities.iter().map(E::to_response).collect())
    }
}

fn not_found<E: Entity>(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("{} not found with id: {}", E::NAME, id))
}

#[async_trait]
impl<E: Entity> CacheWarmable for EntityService<E> {
    fn entity_name(&self) -> &'static str {
        E::PLURAL
    }

    async fn refresh_cache(&self) -> Result<usize> {
        EntityService::refresh_cache(self).await
    }
}

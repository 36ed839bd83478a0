//! Application state wiring repositories, the cache backend, and services.
//!
//! The state holds one [`EntityService`] per entity kind plus the warmable
//! registry enumerated by the cache refresh endpoint. Backend combinations
//! are selected at compile time via feature flags.

use std::sync::Arc;

use billsync_core::billing::{Client, Invoice};
use billsync_core::cache::CacheBackend;
use billsync_core::service::{CacheWarmable, EntityService};
use billsync_core::storage::Repository;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!("Cannot enable both 'inmemory' and 'sqlite' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

// Cache features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!("Cannot enable both 'memory' and 'redis' cache features");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Must enable exactly one cache feature: 'memory' or 'redis'");

/// Shared application state.
///
/// This is cloned for each request handler and contains the entity services
/// plus the registry of cache-warmable services.
#[derive(Clone)]
pub struct AppState {
    /// Client service (cache-aware CRUD).
    pub clients: Arc<EntityService<Client>>,
    /// Invoice service (cache-aware CRUD).
    pub invoices: Arc<EntityService<Invoice>>,
    /// Every service whose cache can be bulk-refreshed.
    pub warmables: Arc<Vec<Arc<dyn CacheWarmable>>>,
}

impl AppState {
    /// Wires the services over the given repositories and cache backend.
    fn from_parts(
        client_repo: Arc<dyn Repository<Client>>,
        invoice_repo: Arc<dyn Repository<Invoice>>,
        backend: Arc<dyn CacheBackend>,
        config: &Config,
    ) -> Self {
        let ttl = Some(config.cache_ttl());
        let clients = Arc::new(EntityService::new(client_repo, backend.clone(), ttl));
        let invoices = Arc::new(EntityService::new(invoice_repo, backend, ttl));

        let warmables: Vec<Arc<dyn CacheWarmable>> = vec![clients.clone(), invoices.clone()];

        Self {
            clients,
            invoices,
            warmables: Arc::new(warmables),
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::inmemory::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let backend = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::from_parts(repo.clone(), repo, backend, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::inmemory::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let backend = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::from_parts(repo.clone(), repo, backend, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::sqlite::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let backend = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::from_parts(repo.clone(), repo, backend, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::sqlite::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let backend = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::from_parts(repo.clone(), repo, backend, config))
        }
    }
}

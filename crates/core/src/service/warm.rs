use async_trait::async_trait;

use super::Result;

/// Capability exposed by services whose caches can be bulk-refreshed.
///
/// Implementations are registered in the application state and enumerated by
/// an external trigger (the cache refresh endpoint) for cold-start warming.
#[async_trait]
pub trait CacheWarmable: Send + Sync {
    /// Name reported for this entity kind in the refresh summary.
    fn entity_name(&self) -> &'static str;

    /// Reloads every entity from the repository into the cache and returns
    /// the number of entities refreshed.
    async fn refresh_cache(&self) -> Result<usize>;
}

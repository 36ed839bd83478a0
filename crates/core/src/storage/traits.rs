use async_trait::async_trait;

use super::Result;

/// Generic repository over one entity kind.
///
/// Identity handling follows the entity's surrogate key: `save` inserts when
/// the id is `0` (the store assigns a fresh identity) and updates otherwise.
/// `delete_by_id` on an absent id is a no-op; existence checks belong to the
/// caller.
#[async_trait]
pub trait Repository<E>: Send + Sync {
    /// Returns every entity, ordered by id.
    async fn find_all(&self) -> Result<Vec<E>>;

    /// Returns the entity with the given id, if present.
    async fn find_by_id(&self, id: i64) -> Result<Option<E>>;

    /// Persists the entity and returns it with its assigned identity.
    async fn save(&self, entity: E) -> Result<E>;

    /// Deletes the entity with the given id, if present.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Returns whether an entity with the given id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool>;
}

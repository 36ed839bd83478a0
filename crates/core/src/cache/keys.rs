//! Pure key derivation for entity cache namespaces.

/// Returns the cache key for a single entity.
pub fn id_key(prefix: &str, id: i64) -> String {
    format!("{}_{}", prefix, id)
}

/// Returns the cache key for an entity kind's full collection snapshot.
pub fn all_key(prefix: &str) -> String {
    format!("{}_all", prefix)
}

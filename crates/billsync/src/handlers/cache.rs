//! Cache maintenance handlers.

use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::{handlers::ApiError, state::AppState};

/// Refresh every registered entity cache (POST /api/cache/refresh).
///
/// Walks the warmable registry, reloading each entity kind's collection
/// snapshot and per-id entries from the repository, and reports the refreshed
/// count per entity kind.
pub async fn refresh_cache(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, usize>>, ApiError> {
    let mut refreshed = BTreeMap::new();

    for warmable in state.warmables.iter() {
        let count = warmable.refresh_cache().await?;
        refreshed.insert(warmable.entity_name().to_string(), count);
    }

    tracing::info!(?refreshed, "cache refreshed");
    Ok(Json(refreshed))
}

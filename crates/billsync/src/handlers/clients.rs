//! Client CRUD handlers.
//!
//! Thin adapters over the client service: parse the request, call the
//! service, map the result. Cache population and invalidation happen inside
//! the service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use billsync_core::billing::{ClientRequest, ClientSummary};

use crate::{handlers::ApiError, state::AppState};

/// List all clients (GET /api/clients).
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientSummary>>, ApiError> {
    Ok(Json(state.clients.get_all().await?))
}

/// Get a single client by ID (GET /api/clients/{id}).
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClientSummary>, ApiError> {
    Ok(Json(state.clients.get_by_id(id).await?))
}

/// Create a new client (POST /api/clients).
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<ClientRequest>,
) -> Result<(StatusCode, Json<ClientSummary>), ApiError> {
    let created = state.clients.create(request).await?;
    tracing::info!(id = created.id, "created client");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing client (PUT /api/clients/{id}).
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ClientRequest>,
) -> Result<Json<ClientSummary>, ApiError> {
    let updated = state.clients.update(id, request).await?;
    tracing::info!(id, "updated client");
    Ok(Json(updated))
}

/// Delete a client (DELETE /api/clients/{id}).
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.clients.delete(id).await?;
    tracing::info!(id, "deleted client");
    Ok(StatusCode::NO_CONTENT)
}

//! Invoice CRUD handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use billsync_core::billing::{InvoiceRequest, InvoiceSummary};

use crate::{handlers::ApiError, state::AppState};

/// List all invoices (GET /api/invoices).
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvoiceSummary>>, ApiError> {
    Ok(Json(state.invoices.get_all().await?))
}

/// Get a single invoice by ID (GET /api/invoices/{id}).
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InvoiceSummary>, ApiError> {
    Ok(Json(state.invoices.get_by_id(id).await?))
}

/// Create a new invoice (POST /api/invoices).
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(request): Json<InvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceSummary>), ApiError> {
    let created = state.invoices.create(request).await?;
    tracing::info!(id = created.id, client_id = created.client_id, "created invoice");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing invoice (PUT /api/invoices/{id}).
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<InvoiceRequest>,
) -> Result<Json<InvoiceSummary>, ApiError> {
    let updated = state.invoices.update(id, request).await?;
    tracing::info!(id, "updated invoice");
    Ok(Json(updated))
}

/// Delete an invoice (DELETE /api/invoices/{id}).
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.invoices.delete(id).await?;
    tracing::info!(id, "deleted invoice");
    Ok(StatusCode::NO_CONTENT)
}

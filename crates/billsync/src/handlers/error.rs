use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use billsync_core::service::{service_error_to_status_code, ServiceError};

/// Wraps [`ServiceError`] for axum responses.
///
/// `NotFound` and `Validation` are client-facing and keep their structured
/// detail; everything else is logged server-side and reported with a generic
/// message, without internal detail.
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(service_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match &self.0 {
            ServiceError::NotFound(message) => {
                tracing::debug!(status = %status, detail = %message, "not found");
                serde_json::json!({ "error": message })
            }
            ServiceError::Validation(details) => {
                tracing::debug!(status = %status, ?details, "validation failed");
                serde_json::json!({ "error": "Validation failed", "details": details })
            }
            other => {
                tracing::error!(error = %other, "internal error");
                serde_json::json!({ "error": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

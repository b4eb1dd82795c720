//! Application error type mapping to HTTP status codes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use nova_types::error::StoreError;

/// Application-level error that maps to HTTP responses.
///
/// Conversation endpoints degrade to a 200 with a friendly message instead
/// of failing, so this only carries store writes the caller asked for
/// directly.
#[derive(Debug)]
pub enum AppError {
    /// A state file could not be written.
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!(status = status.as_u16(), error = %message, "Request failed");

        (status, Json(json!({ "error": message }))).into_response()
    }
}

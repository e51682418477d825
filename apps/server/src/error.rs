//! Server error types.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Field-level validation errors, keyed by payload field name.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Missing or unresolvable session token.
    #[error("Authentication required")]
    Unauthenticated,

    /// Request payload failed schema validation.
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Referenced meal does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Storage error.
    #[error("Store error: {0}")]
    Store(#[from] meal_store::MealStoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            // Validation failures surface as 401 with a field-error map, not
            // the conventional 400. Preserved from the observed behavior of
            // the service this replaces.
            ServerError::Validation(errors) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "success": false,
                    "message": {},
                    "error": errors,
                })),
            )
                .into_response(),
            // Missing meals surface as 400 with a human-readable message,
            // not 404. Also preserved.
            ServerError::NotFound(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ServerError::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

//! Error types for sims
//!
//! Every handler failure is converted to a JSON `{"error": ...}` body at the
//! HTTP boundary; no error crosses it unencoded.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Convenience Result type using the sims error
pub type Result<T> = std::result::Result<T, ApiError>;

/// Handler-level error taxonomy
///
/// 400 validation, 404 missing, 500 configuration/persistence/internal,
/// 502 upstream LLM failure.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid user input; message is the exact client-facing text
    #[error("{0}")]
    Validation(String),

    /// Requested record does not exist
    #[error("not found")]
    NotFound,

    /// Missing or invalid server configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem fault while writing the data file
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The upstream LLM provider rejected or failed the request
    #[error("LLM API request failed")]
    Upstream(String),

    /// Catch-all internal fault
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "not found" })),
            ApiError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
            ApiError::Persistence(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
            ApiError::Upstream(details) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "LLM API request failed", "details": details }),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
        };

        (status, Json(body)).into_response()
    }
}

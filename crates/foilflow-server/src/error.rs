//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use foilflow_core::CoreError;
use foilflow_layout::LayoutError;
use serde::Serialize;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let detail = ApiErrorDetail {
            code: code.to_string(),
            message: message.to_string(),
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::NodeNotFound { .. } => ApiError::NotFound(err.to_string()),
            CoreError::OptionOutOfRange { .. }
            | CoreError::NoProgression { .. }
            | CoreError::HistoryOutOfRange { .. } => ApiError::BadRequest(err.to_string()),
            CoreError::Parse(_) | CoreError::IdMismatch { .. } | CoreError::MissingRoot => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

impl From<LayoutError> for ApiError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::InvalidDimension { .. } => ApiError::BadRequest(err.to_string()),
            LayoutError::Core(core) => core.into(),
            LayoutError::Render(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

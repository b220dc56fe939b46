//! Error types for Bookshelf server

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::messages::Locale;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// `fail` for client errors, `error` for server errors
    pub status: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, label, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "fail", msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "fail", msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "fail", msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { status: label.to_string(), message })).into_response()
    }
}

// Extraction failures happen before a handler knows the configured locale,
// so they use the default message table.

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        AppError::BadRequest(Locale::default().malformed_request().to_string())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Rejected path: {}", rejection.body_text());
        AppError::BadRequest(Locale::default().malformed_request().to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

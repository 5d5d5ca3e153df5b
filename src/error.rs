//! Error types for the metadata cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache and the metadata lookup path.
///
/// Cache operations themselves never fail; only construction
/// (`InvalidConfig`) and the authoritative backend produce errors.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No object or directory exists at the path
    #[error("Path not found: {0}")]
    NotFound(String),

    /// Construction-time contract violation (e.g. zero capacity)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The authoritative metadata source failed
    #[error("Backend error: {0}")]
    Backend(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Backend(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;

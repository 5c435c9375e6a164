//! # API Errors
//!
//! Error types for the HTTP resource handler. Absence surfaces here as 404;
//! store failures map to 500 and are logged at the boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP resource handler errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// No person with the requested id
    #[error("Person {0} not found")]
    NotFound(u64),

    /// Persistence failure, surfaced as a generic server error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            Logger::error("REQUEST_FAILED", &[("error", &self.to_string())]);
        }
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

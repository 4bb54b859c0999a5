//! # HTTP API Errors
//!
//! Error types for the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{SchemaError, ValidationDetails};
use crate::store::StoreError;

use super::response::MessageResponse;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Fixed body text for a missing person
pub const NOT_FOUND_MESSAGE: &str = "Pessoa not found";

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body, query or path failed the declared schema
    #[error("{0}")]
    Validation(#[from] SchemaError),

    /// Request could not be read (size limit, bad query encoding)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// `GET /pessoa/{id}` found nothing
    #[error("Pessoa not found")]
    NotFound,

    /// Path matched a route pattern but not its id grammar (unsigned digits)
    #[error("Not found")]
    UnknownRoute,

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::UnknownRoute => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ValidationDetails>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.status_code().as_u16();
        let error = err.to_string();
        let details = match err {
            ApiError::Validation(schema_err) => schema_err.into_details(),
            _ => Vec::new(),
        };
        Self { error, code, details }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::NotFound = self {
            return (status, Json(MessageResponse::new(NOT_FOUND_MESSAGE))).into_response();
        }
        if let ApiError::UnknownRoute = self {
            return status.into_response();
        }

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

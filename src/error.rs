//! Error types for the employee API
//!
//! `StoreError` covers persistence failures; `ApiError` is what handlers
//! return and renders as the `{isOk: false, error}` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rusqlite::ffi;
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failure raised by the employee store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique column (`id` or `email`) already holds the value
    #[error("{0}")]
    Conflict(String),

    /// Any other failure reported by SQLite
    #[error("Storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl StoreError {
    /// Classifies a write error, turning unique-key violations into `Conflict`.
    pub(crate) fn from_write(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(code, message) = &err {
            let unique = code.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                || code.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY;
            if unique {
                let detail = message.as_deref().unwrap_or_default();
                let column = if detail.contains("email") { "email" } else { "id" };
                return StoreError::Conflict(format!(
                    "An employee with this {} already exists",
                    column
                ));
            }
        }
        StoreError::Storage(err)
    }
}

// == Api Error Enum ==
/// Error returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client-side problem: failed validation, or a rejected create/update
    #[error("{0}")]
    BadRequest(String),

    /// Requested employee or route does not exist
    #[error("{0}")]
    NotFound(String),

    /// Server-side failure; the message is safe to show, details are logged
    #[error("{0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

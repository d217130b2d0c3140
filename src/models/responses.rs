//! Response DTOs for the employee API
//!
//! Every body carries `isOk`; successes add `data` or `message`, failures
//! add `error`.

use serde::Serialize;

/// Success envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "isOk")]
    pub is_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Envelope carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            is_ok: true,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// Envelope carrying only a message (used by delete).
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            is_ok: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    #[serde(rename = "isOk")]
    pub is_ok: bool,
    /// Always "ok"
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            is_ok: true,
            status: "ok".to_string(),
            message: "EMS Backend is running".to_string(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "isOk")]
    pub is_ok: bool,
    /// Short, client-safe description of what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            is_ok: false,
            error: error.into(),
        }
    }
}

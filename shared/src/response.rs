//! API Response types
//!
//! Every POS API endpoint answers with the same envelope:
//! ```json
//! { "data": ..., "error": true, "message": "Table not found" }
//! ```
//! All three fields are optional. A truthy `error` means the request was
//! rejected and `data` must not be trusted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified API response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Set when the request was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    /// Human-readable diagnostic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The envelope carried `error: true`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("request rejected"))]
pub struct Rejection {
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Create a successful response without payload
    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
            message: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(true),
            message: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.unwrap_or(false)
    }

    /// Decode the envelope once: rejected, or accepted with optional data
    pub fn into_result(self) -> Result<Option<T>, Rejection> {
        if self.is_error() {
            return Err(Rejection {
                message: self.message,
            });
        }
        Ok(self.data)
    }
}

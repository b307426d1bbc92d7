//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "pool not found: nums",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                  |
/// |-----------|-----------------|------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request              |
/// | 2000–2999 | State/Not Found | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Server          | 500 Internal Server Error    |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Pool creation asked for a type tag the catalog does not know.
    #[error("type not registered: {0}")]
    TypeNotRegistered(String),

    /// Object type tag differs from the pool's declared type tag.
    #[error("object type `{actual}` does not match pool type `{expected}`")]
    TypeMismatch {
        /// Type tag declared by the pool.
        expected: String,
        /// Type tag carried by the rejected object.
        actual: String,
    },

    /// Pool already holds as many objects as its capacity allows.
    #[error("pool {pool} is full (capacity {capacity})")]
    CapacityExceeded {
        /// Name of the full pool.
        pool: String,
        /// Configured capacity of the pool.
        capacity: usize,
    },

    /// Pool with the given name was not found.
    #[error("pool not found: {0}")]
    PoolNotFound(String),

    /// Object was not found in the pool.
    #[error("object not found in pool {0}")]
    ObjectNotFound(String),

    /// Pool exists but holds no objects.
    #[error("no objects in pool {0}")]
    EmptyPool(String),

    /// A pool with the given name already exists.
    #[error("pool already exists: {0}")]
    PoolAlreadyExists(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::TypeNotRegistered(_) => 1002,
            Self::TypeMismatch { .. } => 1003,
            Self::CapacityExceeded { .. } => 1004,
            Self::PoolNotFound(_) => 2001,
            Self::ObjectNotFound(_) => 2002,
            Self::EmptyPool(_) => 2003,
            Self::PoolAlreadyExists(_) => 2004,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::TypeNotRegistered(_)
            | Self::TypeMismatch { .. }
            | Self::CapacityExceeded { .. } => StatusCode::BAD_REQUEST,
            Self::PoolNotFound(_) | Self::ObjectNotFound(_) | Self::EmptyPool(_) => {
                StatusCode::NOT_FOUND
            }
            Self::PoolAlreadyExists(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

/// Renders a panic caught in a handler as a [`GatewayError::Internal`]
/// response.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    };
    GatewayError::Internal(detail).into_response()
}

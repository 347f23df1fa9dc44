//! Error types for the Libris REST API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to JSON error envelopes.
//!
//! # Error Mapping
//!
//! Catalog errors are automatically mapped to HTTP status codes and error
//! codes:
//!
//! | Catalog Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | BookError::NotFound | 404 | not-found |
//! | BookError::AlreadyExists / DuplicateIsbn | 409 | conflict |
//! | QueryError::InvalidArgument | 400 | invalid |
//! | ValidationError | 400 | invalid |
//! | AccountError::AlreadyRegistered | 409 | conflict |
//! | AccountError::InvalidCredentials / InvalidToken | 401 | unauthorized |
//! | BackendError | 500 | exception |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use libris_catalog::error::{
    AccountError, BackendError, BookError, CatalogError, QueryError, ValidationError,
};
use std::fmt;

/// The primary error type for REST API operations.
///
/// Each variant maps to one HTTP status code and one error code of the
/// `{ success: false, message, code }` envelope.
#[derive(Debug)]
pub enum RestError {
    /// Resource not found (HTTP 404).
    NotFound {
        /// Error message.
        message: String,
    },

    /// Bad request - malformed input or validation error (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Conflict with existing state (HTTP 409).
    Conflict {
        /// Error message.
        message: String,
    },

    /// Missing or rejected credentials (HTTP 401).
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Shorthand for a [`RestError::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }

    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::Conflict { .. } => StatusCode::CONFLICT,
            RestError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } => "not-found",
            RestError::BadRequest { .. } => "invalid",
            RestError::Conflict { .. } => "conflict",
            RestError::Unauthorized { .. } => "unauthorized",
            RestError::InternalError { .. } => "exception",
        }
    }

    fn message(&self) -> &str {
        match self {
            RestError::NotFound { message }
            | RestError::BadRequest { message }
            | RestError::Conflict { message }
            | RestError::Unauthorized { message }
            | RestError::InternalError { message } => message,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { message } => write!(f, "Not found: {}", message),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::Conflict { message } => write!(f, "Conflict: {}", message),
            RestError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        if let RestError::InternalError { message } = &self {
            tracing::error!(error = %message, "Request failed");
        }
        let body = create_error_envelope(self.code(), self.message());
        (self.status(), Json(body)).into_response()
    }
}

/// Creates the JSON error envelope.
///
/// # Arguments
///
/// * `code` - The machine-readable error code
/// * `message` - Human-readable details
fn create_error_envelope(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "message": message,
        "code": code,
    })
}

// Implement conversions from catalog errors

impl From<CatalogError> for RestError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Book(e) => e.into(),
            CatalogError::Query(e) => e.into(),
            CatalogError::Validation(e) => e.into(),
            CatalogError::Account(e) => e.into(),
            CatalogError::Backend(e) => e.into(),
        }
    }
}

impl From<BookError> for RestError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound { .. } => RestError::NotFound {
                message: "Book not found".to_string(),
            },
            BookError::AlreadyExists { .. } | BookError::DuplicateIsbn { .. } => {
                RestError::Conflict {
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingRequiredField { field } => RestError::BadRequest {
                message: format!("Missing required field: {}", field),
            },
            ValidationError::OutOfRange { .. } | ValidationError::InvalidValue { .. } => {
                RestError::BadRequest {
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<AccountError> for RestError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::AlreadyRegistered { .. } => RestError::Conflict {
                message: "User already exists with this email".to_string(),
            },
            AccountError::InvalidCredentials => RestError::Unauthorized {
                message: "Invalid email or password".to_string(),
            },
            AccountError::InvalidToken => RestError::Unauthorized {
                message: "Invalid or expired token".to_string(),
            },
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

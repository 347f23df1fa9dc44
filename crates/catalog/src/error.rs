//! Error types for the catalog layer.
//!
//! Errors are grouped by concern: book state, query validation, record
//! validation, accounts and backend failures. [`CatalogError`] wraps them all
//! so storage and service code can use a single `?`-friendly result type.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::BookId;

/// The primary error type for all catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Book state errors
    #[error(transparent)]
    Book(#[from] BookError),

    /// Query request errors
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Record validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Account registry errors
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to the state of a book record.
#[derive(Error, Debug)]
pub enum BookError {
    /// The requested book was not found.
    #[error("book not found: {id}")]
    NotFound { id: BookId },

    /// A book with the given id already exists.
    #[error("book already exists: {id}")]
    AlreadyExists { id: BookId },

    /// Another book already carries this ISBN.
    #[error("a book with ISBN {isbn} already exists")]
    DuplicateIsbn { isbn: String },
}

/// Errors raised by the query engine.
///
/// The engine fails fast; every variant describes a malformed request, never
/// a transient condition, so retrying with the same input yields the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// A pagination, sort or filter parameter is malformed or out of range.
    #[error("invalid argument '{parameter}': {message}")]
    InvalidArgument { parameter: String, message: String },
}

impl QueryError {
    /// Shorthand for building an [`QueryError::InvalidArgument`].
    pub fn invalid(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        QueryError::InvalidArgument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &str {
        match self {
            QueryError::InvalidArgument { parameter, .. } => parameter,
        }
    }
}

/// Errors related to book record validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },

    /// A numeric field is outside its allowed range.
    #[error("{field} out of range: {message}")]
    OutOfRange { field: String, message: String },

    /// A field has an unusable value.
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors related to user accounts.
#[derive(Error, Debug)]
pub enum AccountError {
    /// The email address is already registered.
    #[error("user already exists with email {email}")]
    AlreadyRegistered { email: String },

    /// Email or password did not match.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The session token is unknown.
    #[error("invalid or expired session token")]
    InvalidToken,
}

/// Errors originating from the storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

//! Error types for the persistence layer.
//!
//! Errors are split by where they originate:
//!
//! - [`ValidationError`] - a request parameter could not be turned into a filter.
//!   No query is issued.
//! - [`QueryError`] - a query failed to execute or a returned row failed to scan.
//! - [`BackendError`] - the connection pool or the database itself is unavailable.
//!
//! Only [`ValidationError`] is the client's fault. Everything else is an internal
//! failure of the request that must be logged by the caller and reported without
//! driver details.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all catalog operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Request parameter errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Query execution and row scan errors
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Backend and connection errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns true when the error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StorageError::Validation(_))
    }
}

/// Errors raised while turning request parameters into search filters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A parameter value could not be parsed into the expected type.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },
}

impl ValidationError {
    /// Creates an [`ValidationError::InvalidParameter`] error.
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while executing a query or reading its rows.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The statement could not be prepared or executed.
    #[error("query execution failed in {backend_name}: {message}")]
    Execution {
        backend_name: String,
        message: String,
    },

    /// A row could not be converted into the expected shape.
    #[error("failed to scan {column} in {backend_name}: {message}")]
    Scan {
        backend_name: String,
        column: String,
        message: String,
    },
}

/// Errors raised by a storage backend outside of a single query.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

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
pub type StorageResult<T> = Result<T, StorageError>;

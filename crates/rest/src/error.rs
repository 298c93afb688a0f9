//! Error types for the catalog REST API.
//!
//! Every error is rendered as a JSON body of the form
//! `{"error": {"code": "...", "message": "..."}}`.
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | ValidationError | 400 | invalid |
//! | QueryError | 500 | exception |
//! | BackendError | 500 | exception |
//!
//! Lookups that find nothing are reported by handlers as [`RestError::NotFound`].
//! Internal error messages are logged but never sent to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use smdb_persistence::error::StorageError;
use std::fmt;
use tracing::error;

/// Message returned to clients in place of internal failure details.
const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred while processing the request";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Bad request - invalid query parameter or body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Entity not found (HTTP 404).
    NotFound {
        /// The kind of entity (e.g., "Song").
        entity: String,
        /// The requested identifier.
        id: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message, logged only.
        message: String,
    },

    /// The backend is not accepting connections (HTTP 503).
    ServiceUnavailable {
        /// Error message, logged only.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::BadRequest { .. } => "invalid",
            RestError::NotFound { .. } => "not-found",
            RestError::InternalError { .. } => "exception",
            RestError::ServiceUnavailable { .. } => "transient",
        }
    }

    /// Creates a [`RestError::NotFound`] for a song.
    pub fn song_not_found(id: impl Into<String>) -> Self {
        RestError::NotFound {
            entity: "Song".to_string(),
            id: id.into(),
        }
    }

    /// Creates a [`RestError::NotFound`] for a pack.
    pub fn pack_not_found(id: impl Into<String>) -> Self {
        RestError::NotFound {
            entity: "Pack".to_string(),
            id: id.into(),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::NotFound { entity, id } => write!(f, "{} not found: {}", entity, id),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let message = match &self {
            RestError::BadRequest { message } => message.clone(),
            RestError::NotFound { entity, id } => format!("{} {} not found", entity, id),
            RestError::InternalError { message } => {
                error!(error = %message, "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            RestError::ServiceUnavailable { message } => {
                error!(error = %message, "Backend unavailable");
                "The catalog database is unavailable".to_string()
            }
        };

        let body = serde_json::json!({
            "error": {
                "code": self.code(),
                "message": message,
            }
        });

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => RestError::BadRequest {
                message: e.to_string(),
            },
            StorageError::Query(e) => RestError::InternalError {
                message: e.to_string(),
            },
            StorageError::Backend(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

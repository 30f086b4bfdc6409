/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Types
 *
 * - `BackendError` - Everything a handler can return
 * - `StoreError` - Failures reported by the persistence layer
 *
 * # Leakage
 *
 * Messages of server-side failures are replaced by a generic text before
 * they leave the process. The original error is logged where it happens.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::auth::error::AuthError;
use crate::shared::SharedError;

/// Failures reported by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("record already exists")]
    Conflict,

    /// A stored JSON column could not be decoded
    #[error("stored data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The database could not serve the request
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let unique_violation = err
            .as_database_error()
            .map(|db_err| db_err.is_unique_violation())
            .unwrap_or(false);

        if unique_violation {
            Self::Conflict
        } else {
            Self::Unavailable(err)
        }
    }
}

/// Backend-specific error types
///
/// Each variant can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use reportdesk::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Layout not found for this user");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. not found, conflict)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Login or authorization gate failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Payload validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Unexpected server-side failure
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the logs, never sent to clients
        message: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a 404 error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Auth` - 401, or 503 when the user store is down
    /// - `Store` - 409 on conflicts, 503 when unavailable, 500 when corrupt
    /// - `SharedError` - 400
    /// - `Internal` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
                AuthError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            },
            Self::Store(err) => match err {
                StoreError::Conflict => StatusCode::CONFLICT,
                StoreError::Corrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
                StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to show to a client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(err) => err.to_string(),
            Self::Store(StoreError::Conflict) => "Resource already exists".to_string(),
            Self::Store(StoreError::Unavailable(_)) => AuthError::Unavailable.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::Store(StoreError::Corrupt(_)) | Self::Internal { .. } => "Internal server error".to_string(),
        }
    }

    /// Whether the response must carry a `WWW-Authenticate: Bearer` challenge
    pub fn is_bearer_challenge(&self) -> bool {
        matches!(self, Self::Auth(AuthError::Unauthenticated))
    }
}

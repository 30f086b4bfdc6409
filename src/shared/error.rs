//! Shared Error Types
//!
//! Errors raised while checking client payloads before they reach the
//! persistence layer.
//!
//! # Usage
//!
//! ```rust
//! use reportdesk::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "Report name cannot be empty");
//! ```

use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Payload validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

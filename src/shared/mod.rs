//! Shared Module
//!
//! This module contains types that do not depend on the server stack: the
//! report layout payloads exchanged with clients and the validation error
//! used when those payloads are rejected.

/// Report layout payloads
pub mod layout;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use layout::{LayoutEnvelope, LayoutSavedResponse, LayoutView, ReportLayoutRequest, Section};
pub use error::SharedError;

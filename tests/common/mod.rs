//! Common test utilities and helpers
//!
//! - Database and application fixtures
//! - Authentication test helpers
//! - Custom assertion macros

pub mod auth_helpers;

pub use auth_helpers::*;
pub use database::*;

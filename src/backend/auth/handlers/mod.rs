//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /token - Exchange credentials for a bearer token
//! - **`get_me`** - GET /users/me - Current user (behind the gate)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, MeResponse, RegisterRequest, RegisterResponse, TokenResponse};

// Re-export handlers
pub use register::register;
pub use login::login;
pub use me::get_me;

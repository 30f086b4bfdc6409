//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation, middleware stack
//! ├── api_routes.rs     - Registration, login, current user
//! └── layout_routes.rs  - Report layout endpoints
//! ```
//!
//! Public routes are `GET /`, `POST /register` and `POST /token`. Everything
//! else is layered with the authorization gate.

/// Main router creation
pub mod router;

/// Authentication endpoints
pub mod api_routes;

/// Report layout endpoints
pub mod layout_routes;

pub use router::create_router;

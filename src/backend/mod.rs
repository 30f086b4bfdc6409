//! Backend Module
//!
//! This module contains all server-side code for Report Desk: an Axum HTTP
//! API where users register, log in for a bearer token, and manage their
//! report layouts.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, tokens, users, login/register handlers
//! - **`middleware`** - The authorization gate
//! - **`layouts`** - Report layout storage and handlers
//! - **`error`** - Backend error types and their HTTP responses
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── layouts/        - Report layouts
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Public requests (`/`, `/register`, `/token`) go straight to their handler.
//! Protected requests pass through `auth_middleware` first, which verifies the
//! bearer token, re-reads the user it names and attaches an
//! `AuthenticatedUser` to the request. Any rejection ends the request with
//! `401 Could not validate credentials`.
//!
//! # Example
//!
//! ```rust,no_run
//! use reportdesk::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Report layout storage
pub mod layouts;

pub use error::BackendError;
pub use server::create_app;

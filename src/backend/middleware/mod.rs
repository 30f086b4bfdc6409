//! Middleware Module
//!
//! HTTP middleware run before protected handlers.
//!
//! - **`auth`** - The authorization gate, its middleware and the `AuthUser`
//!   extractor
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use reportdesk::backend::middleware::auth_middleware;
//!
//! let protected = protected.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthGate, AuthUser, AuthenticatedUser};

//! Report Desk
//!
//! A small web backend for storing per-user report layouts behind
//! password login and stateless bearer tokens.
//!
//! # Module Structure
//!
//! - **`shared`** - Framework-free payload types and validation errors
//! - **`backend`** - The Axum server (only compiled with the `ssr` feature)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend and its server-only
//!   dependencies. Without it only the `shared` types are built.
//!
//! # Usage
//!
//! ```rust,no_run
//! use reportdesk::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&ServerConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```

/// Types shared between the server and its clients
pub mod shared;

/// Server-side code
#[cfg(feature = "ssr")]
pub mod backend;

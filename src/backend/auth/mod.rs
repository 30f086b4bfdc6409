//! Authentication Module
//!
//! This module handles user registration, login and the pieces the
//! authorization gate is built from.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── error.rs        - Caller-facing authentication errors
//! ├── password.rs     - bcrypt credential hashing
//! ├── sessions.rs     - JWT token codec
//! ├── users.rs        - User model, queries and the UserStore seam
//! ├── identity.rs     - Token subject to user resolution
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Token issuing handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → password hashed → user stored
//! 2. **Login**: username and password → hash verified → bearer token returned
//! 3. **Protected request**: bearer token → signature, expiry, subject checked
//!    → user re-read from the database
//!
//! The gate itself lives in `backend::middleware::auth`.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HMAC-signed JWTs with a configurable lifetime (30 minutes by default)
//! - Unknown usernames and wrong passwords produce the same 401
//! - Every token rejection produces the same 401

pub mod error;

/// bcrypt credential hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User data model and database operations
pub mod users;

/// Token subject resolution
pub mod identity;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use error::AuthError;
pub use handlers::types::{LoginRequest, MeResponse, RegisterRequest, RegisterResponse, TokenResponse};
pub use handlers::{get_me, login, register};
pub use identity::{IdentityResolver, ResolveError};
pub use password::PasswordHasher;
pub use sessions::{Claims, IssueError, TokenCodec, TokenError};
pub use users::{Credential, Identity, SqlUserStore, UserStore};

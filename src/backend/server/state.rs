/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds the services every handler may need:
 * - The SQLite connection pool (layout queries)
 * - The user store behind the `UserStore` seam (auth queries)
 * - The password hasher and the token codec
 * - The authorization gate used by the auth middleware
 *
 * Everything in it is cheap to clone: the pool and the `Arc`s are shared
 * handles, and nothing in the state is mutable after startup.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::identity::IdentityResolver;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users::{SqlUserStore, UserStore};
use crate::backend::middleware::auth::AuthGate;
use crate::backend::server::config::{AuthConfig, ConfigError};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Credential and identity lookups
    pub users: Arc<dyn UserStore>,

    /// bcrypt hasher configured with `BCRYPT_COST`
    pub hasher: PasswordHasher,

    /// Issues tokens at login and verifies them in the gate
    pub tokens: Arc<TokenCodec>,

    /// Authorization gate run by `auth_middleware`
    pub auth_gate: AuthGate,
}

impl AppState {
    /// Assemble the state over an open pool.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the auth settings cannot produce a working
    /// hasher or token codec.
    pub fn new(db_pool: SqlitePool, auth: &AuthConfig) -> Result<Self, ConfigError> {
        let users: Arc<dyn UserStore> = Arc::new(SqlUserStore::new(db_pool.clone()));
        Self::with_user_store(db_pool, users, auth)
    }

    /// Assemble the state with a caller-supplied user store.
    pub fn with_user_store(
        db_pool: SqlitePool,
        users: Arc<dyn UserStore>,
        auth: &AuthConfig,
    ) -> Result<Self, ConfigError> {
        let hasher = PasswordHasher::new(auth.bcrypt_cost).map_err(|e| ConfigError::InvalidValue {
            key: "BCRYPT_COST",
            message: e.to_string(),
        })?;
        let tokens = Arc::new(TokenCodec::from_config(auth)?);
        let auth_gate = AuthGate::new(tokens.clone(), IdentityResolver::new(users.clone()));

        Ok(Self {
            db_pool,
            users,
            hasher,
            tokens,
            auth_gate,
        })
    }
}

/// Lets handlers extract the pool with `State(pool): State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for AuthGate {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_gate.clone()
    }
}

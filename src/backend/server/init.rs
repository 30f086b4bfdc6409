/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Build the hasher, token codec and authorization gate
 * 3. Create and configure the router
 *
 * Any failure aborts startup: a server that cannot authenticate or persist
 * users has nothing useful to serve.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns [`InitError`] if the database cannot be opened or migrated, or if
/// the auth settings are unusable.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing Report Desk backend server");

    let db_pool = connect_database(&config.database_url).await?;
    let app_state = AppState::new(db_pool, &config.auth)?;

    tracing::info!(
        algorithm = ?config.auth.algorithm,
        token_ttl_minutes = config.auth.token_ttl.num_minutes(),
        bcrypt_cost = config.auth.bcrypt_cost,
        "Authentication configured"
    );

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}

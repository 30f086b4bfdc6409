/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opens the SQLite connection pool the rest of the backend runs on.
 *
 * # Configuration Sources
 *
 * Configuration is read once at startup from environment variables (a `.env`
 * file is loaded by the binary first). Every value except `JWT_SECRET` has a
 * default suitable for local development:
 *
 * | Variable                      | Default                            |
 * |-------------------------------|------------------------------------|
 * | `JWT_SECRET`                  | required                           |
 * | `JWT_ALGORITHM`               | `HS256`                            |
 * | `ACCESS_TOKEN_EXPIRE_MINUTES` | `30`                               |
 * | `BCRYPT_COST`                 | `bcrypt::DEFAULT_COST`             |
 * | `DATABASE_URL`                | `sqlite://reportdesk.db?mode=rwc`  |
 * | `SERVER_PORT`                 | `8000`                             |
 *
 * # Error Handling
 *
 * Unlike optional services, authentication cannot run without a secret.
 * Any invalid or missing required value is a [`ConfigError`] and the server
 * refuses to start.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::Algorithm;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::backend::auth::password::{MAX_COST, MIN_COST};
use crate::backend::server::init::InitError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://reportdesk.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Invalid or missing startup configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration value `{0}`")]
    MissingValue(&'static str),

    #[error("invalid value for `{key}`: {message}")]
    InvalidValue { key: &'static str, message: String },
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}

/// Token signing secret
///
/// The bytes are only reachable through [`JwtSecret::expose`]; `Debug`
/// never prints them.
#[derive(Clone, PartialEq, Eq)]
pub struct JwtSecret(Vec<u8>);

impl JwtSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret([REDACTED])")
    }
}

/// Settings for password hashing and token issuing
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: JwtSecret,
    pub algorithm: Algorithm,
    /// Lifetime of tokens issued at login
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    pub fn builder() -> AuthConfigBuilder {
        AuthConfigBuilder::default()
    }
}

/// Builder for [`AuthConfig`]
///
/// # Example
///
/// ```rust
/// use reportdesk::backend::server::config::AuthConfig;
///
/// let config = AuthConfig::builder()
///     .jwt_secret("change-me")
///     .token_ttl_minutes(15)
///     .build()
///     .unwrap();
/// assert_eq!(config.token_ttl.num_minutes(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct AuthConfigBuilder {
    jwt_secret: Option<JwtSecret>,
    algorithm: Algorithm,
    token_ttl_minutes: i64,
    bcrypt_cost: u32,
}

impl Default for AuthConfigBuilder {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            algorithm: Algorithm::HS256,
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.jwt_secret = Some(JwtSecret::new(secret));
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = minutes;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Validate and assemble the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingValue`] if no secret was given or it is empty
    /// - [`ConfigError::InvalidValue`] for a non-HMAC algorithm, a
    ///   lifetime that is non-positive or too large to date a token with,
    ///   or a bcrypt cost outside 4..=31
    pub fn build(self) -> Result<AuthConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        if !matches!(self.algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(ConfigError::invalid(
                "JWT_ALGORITHM",
                format!("{:?} is not supported, use HS256, HS384 or HS512", self.algorithm),
            ));
        }

        if self.token_ttl_minutes <= 0 {
            return Err(ConfigError::invalid(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                "must be greater than zero",
            ));
        }
        let token_ttl = Duration::try_minutes(self.token_ttl_minutes)
            .ok_or_else(|| ConfigError::invalid("ACCESS_TOKEN_EXPIRE_MINUTES", "out of range"))?;
        // Tokens issued now must still have a representable expiry
        if Utc::now().checked_add_signed(token_ttl).is_none() {
            return Err(ConfigError::invalid(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                "expiry would fall past the supported date range",
            ));
        }

        if !(MIN_COST..=MAX_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                format!("{} is outside {}..={}", self.bcrypt_cost, MIN_COST, MAX_COST),
            ));
        }

        Ok(AuthConfig {
            jwt_secret,
            algorithm: self.algorithm,
            token_ttl,
            bcrypt_cost: self.bcrypt_cost,
        })
    }
}

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut auth = AuthConfig::builder();

        if let Some(secret) = lookup("JWT_SECRET").filter(|v| !v.is_empty()) {
            auth = auth.jwt_secret(secret);
        }
        if let Some(algorithm) = get("JWT_ALGORITHM") {
            auth = auth.algorithm(parse_algorithm(&algorithm)?);
        }
        if let Some(minutes) = get("ACCESS_TOKEN_EXPIRE_MINUTES") {
            let minutes = minutes
                .parse::<i64>()
                .map_err(|e| ConfigError::invalid("ACCESS_TOKEN_EXPIRE_MINUTES", e.to_string()))?;
            auth = auth.token_ttl_minutes(minutes);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            let cost = cost
                .parse::<u32>()
                .map_err(|e| ConfigError::invalid("BCRYPT_COST", e.to_string()))?;
            auth = auth.bcrypt_cost(cost);
        }

        let port = match get("SERVER_PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("SERVER_PORT", e.to_string()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port,
            auth: auth.build()?,
        })
    }
}

/// Parse a `JWT_ALGORITHM` value. Only the HMAC family is accepted.
pub fn parse_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    match value.to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(ConfigError::invalid(
            "JWT_ALGORITHM",
            format!("{} is not supported, use HS256, HS384 or HS512", other),
        )),
    }
}

/// Open the connection pool and bring the schema up to date
///
/// In-memory databases exist per connection, so they get a single
/// connection that is never recycled.
///
/// # Errors
///
/// Returns [`InitError`] if the database cannot be opened or a migration
/// fails.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, InitError> {
    tracing::info!("Connecting to database...");

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = options.connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {}", e);
        InitError::Database(e)
    })?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        InitError::Migration(e)
    })?;
    tracing::info!("Database ready");

    Ok(pool)
}

/**
 * User Model and Database Operations
 *
 * This module owns the `users` table. It exposes plain query functions in the
 * style of the rest of the backend plus the [`UserStore`] trait, which is the
 * seam the login flow and the identity resolver read through.
 *
 * Usernames are compared case-sensitively (SQLite's default `BINARY`
 * collation).
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::error::StoreError;

/// Row of the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// Unique, case-sensitive login name
    pub username: String,
    /// bcrypt hash, never the plaintext
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// What login needs to check a password
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
}

/// A user as seen by protected operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
}

impl From<User> for Credential {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            password_hash: user.password_hash,
        }
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Create a new user
///
/// # Errors
///
/// [`StoreError::Conflict`] if the username is already taken.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, StoreError> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO users (username, password_hash, created_at)
        VALUES (?, ?, ?)
        "#
    )
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        created_at: now,
    })
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE username = ?
        "#
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Persistence operations the authentication core depends on
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Store a new credential and return the identity it created.
    async fn create_credential(&self, username: &str, password_hash: &str) -> Result<Identity, StoreError>;

    /// Look up the stored credential for a login attempt.
    async fn find_credential(&self, username: &str) -> Result<Option<Credential>, StoreError>;

    /// Look up the identity a token subject names.
    async fn find_identity_by_username(&self, username: &str) -> Result<Option<Identity>, StoreError>;
}

/// [`UserStore`] backed by the `users` table
#[derive(Debug, Clone)]
pub struct SqlUserStore {
    pool: SqlitePool,
}

impl SqlUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn create_credential(&self, username: &str, password_hash: &str) -> Result<Identity, StoreError> {
        create_user(&self.pool, username, password_hash).await.map(Identity::from)
    }

    async fn find_credential(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        Ok(get_user_by_username(&self.pool, username).await?.map(Credential::from))
    }

    async fn find_identity_by_username(&self, username: &str) -> Result<Option<Identity>, StoreError> {
        Ok(get_user_by_username(&self.pool, username).await?.map(Identity::from))
    }
}

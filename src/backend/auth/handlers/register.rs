/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Reject an empty username or password
 * 2. Hash the password with bcrypt on the blocking pool
 * 3. Store the credential (the unique index rejects duplicates)
 *
 * Registration does not log the user in; clients call POST /token next.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::error::{BackendError, StoreError};
use crate::backend::server::state::AppState;
use crate::shared::SharedError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If the username or password is empty
/// * `409 Conflict` - If the username is already registered
/// * `503 Service Unavailable` - If the database cannot be reached
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "pw123" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "username": "alice", "message": "User registered successfully" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, BackendError> {
    if request.username.trim().is_empty() {
        return Err(SharedError::validation("username", "Username cannot be empty").into());
    }
    if request.password.is_empty() {
        return Err(SharedError::validation("password", "Password cannot be empty").into());
    }
    tracing::info!("Register request for username: {}", request.username);

    let hasher = state.hasher.clone();
    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| BackendError::internal(format!("hashing task failed: {}", e)))?
        .map_err(|e| BackendError::internal(format!("failed to hash password: {}", e)))?;

    let identity = state
        .users
        .create_credential(&request.username, &password_hash)
        .await
        .map_err(|e| match e {
            StoreError::Conflict => {
                tracing::warn!("Username already exists: {}", request.username);
                BackendError::handler(StatusCode::CONFLICT, "Username already registered")
            }
            other => {
                tracing::error!("Failed to create user: {}", other);
                other.into()
            }
        })?;

    tracing::info!("User registered: {} (id {})", identity.username, identity.id);

    Ok(Json(RegisterResponse {
        username: identity.username,
        message: "User registered successfully".to_string(),
    }))
}

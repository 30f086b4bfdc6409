/**
 * Login Handler
 *
 * This module implements the token endpoint, POST /token.
 *
 * # Authentication Process
 *
 * 1. Look up the credential by username
 * 2. Verify the password with bcrypt on the blocking pool
 * 3. Issue a bearer token for the username
 *
 * # Security
 *
 * - An unknown username still costs one bcrypt verification
 * - Unknown username and wrong password return the same 401 body
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::State,
    response::Json,
};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the user is not found or the password is incorrect
/// * `503 Service Unavailable` - If the database cannot be reached
///
/// # Example Response
///
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "token_type": "bearer" }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let credential = state
        .users
        .find_credential(&request.username)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {}", e);
            AuthError::Unavailable
        })?;
    let known_user = credential.is_some();

    let hasher = state.hasher.clone();
    let password = request.password;
    let valid = tokio::task::spawn_blocking(move || match credential {
        Some(credential) => hasher.verify(&password, &credential.password_hash),
        None => hasher.verify_unknown(&password),
    })
    .await
    .map_err(|e| BackendError::internal(format!("verification task failed: {}", e)))?;

    if !valid {
        if known_user {
            tracing::warn!("Invalid password for user: {}", request.username);
        } else {
            tracing::warn!("User not found: {}", request.username);
        }
        return Err(AuthError::InvalidCredentials.into());
    }

    let access_token = state
        .tokens
        .issue(&request.username, state.tokens.access_ttl())
        .map_err(|e| BackendError::internal(format!("failed to create token: {}", e)))?;

    tracing::info!("User logged in successfully: {}", request.username);

    Ok(Json(TokenResponse::bearer(access_token)))
}

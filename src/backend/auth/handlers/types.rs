/**
 * Authentication Handler Types
 *
 * Request and response bodies of the register, token and current-user
 * endpoints.
 */

use serde::{Deserialize, Serialize};

/// Register request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    /// Login name (unique, case-sensitive)
    pub username: String,
    /// Plaintext password (hashed before storage, never logged)
    pub password: String,
}

/// Register response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterResponse {
    pub username: String,
    pub message: String,
}

/// Login request
///
/// Same shape as [`RegisterRequest`]; kept separate so the two endpoints can
/// evolve independently.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token response
/// Returned by the login handler.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// Signed bearer token
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Current user response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MeResponse {
    pub username: String,
}

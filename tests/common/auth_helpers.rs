//! Authentication test helpers
//!
//! Registration and login through the HTTP API, plus direct access to a
//! token codec sharing the test secret for forging edge-case tokens.

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use reportdesk::backend::auth::sessions::TokenCodec;
use reportdesk::backend::server::config::AuthConfig;
use serde_json::json;

pub const TEST_SECRET: &str = "integration-test-secret-that-is-long-enough";

/// Auth settings used by every test app: HS256, 30 minutes, cheapest bcrypt
pub fn test_auth_config() -> AuthConfig {
    AuthConfig::builder()
        .jwt_secret(TEST_SECRET)
        .algorithm(Algorithm::HS256)
        .token_ttl_minutes(30)
        .bcrypt_cost(4)
        .build()
        .expect("valid test auth config")
}

/// Codec with the same secret as the test app
pub fn test_codec() -> TokenCodec {
    TokenCodec::from_config(&test_auth_config()).expect("valid test codec")
}

/// Token for `username` that expired a minute ago
pub fn expired_token(username: &str) -> String {
    test_codec()
        .issue(username, Duration::minutes(-1))
        .expect("failed to issue token")
}

/// Register through `POST /register`, asserting success
pub async fn register_user(server: &TestServer, username: &str, password: &str) {
    let response = server
        .post("/register")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "register failed: {}", response.text());
}

/// Log in through `POST /token`, returning the access token
pub async fn login_user(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "login failed: {}", response.text());

    let body: serde_json::Value = response.json();
    body["access_token"]
        .as_str()
        .expect("access_token missing")
        .to_string()
}

/// Register then log in
pub async fn registered_token(server: &TestServer, username: &str, password: &str) -> String {
    register_user(server, username, password).await;
    login_user(server, username, password).await
}

/// `Authorization` header for a bearer token
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("token is a valid header value"),
    )
}

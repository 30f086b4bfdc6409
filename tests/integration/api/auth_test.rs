//! Authentication API integration tests
//!
//! Registration, login and the authorization gate as seen over HTTP.

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{auth_header, expired_token, register_user, registered_token, test_codec, TestApp};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "pw123" }))
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "username": "alice", "message": "User registered successfully" })
    );
}

#[tokio::test]
async fn test_register_trailing_slash() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register/")
        .json(&json!({ "username": "alice", "password": "pw123" }))
        .await;

    assert_status!(response, StatusCode::OK);
}

#[tokio::test]
async fn test_register_stores_hash_not_plaintext() {
    let app = TestApp::new().await;
    register_user(&app.server, "alice", "pw123").await;

    let (hash,): (String,) = sqlx::query_as("SELECT password_hash FROM users WHERE username = 'alice'")
        .fetch_one(app.pool())
        .await
        .unwrap();
    assert!(hash.starts_with("$2"));
    assert!(!hash.contains("pw123"));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    register_user(&app.server, "alice", "pw123").await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "other" }))
        .await;

    assert_status!(response, StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"], "Username already registered");

    // The original password still works
    let response = app
        .server
        .post("/token")
        .json(&json!({ "username": "alice", "password": "pw123" }))
        .await;
    assert_status!(response, StatusCode::OK);
}

#[tokio::test]
async fn test_register_empty_fields_rejected() {
    let app = TestApp::new().await;

    for body in [
        json!({ "username": "", "password": "pw123" }),
        json!({ "username": "alice", "password": "" }),
    ] {
        let response = app.server.post("/register").json(&body).await;
        assert_status!(response, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let app = TestApp::new().await;
    register_user(&app.server, "alice", "pw123").await;

    let response = app
        .server
        .post("/token")
        .json(&json!({ "username": "alice", "password": "pw123" }))
        .await;

    assert_status!(response, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().unwrap();
    let claims = test_codec().verify(token).unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.exp - claims.iat, 30 * 60);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    register_user(&app.server, "alice", "pw123").await;

    let wrong_password = app
        .server
        .post("/token")
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .await;
    let unknown_user = app
        .server
        .post("/token")
        .json(&json!({ "username": "nobody", "password": "pw123" }))
        .await;

    assert_status!(wrong_password, StatusCode::UNAUTHORIZED);
    assert_status!(unknown_user, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json::<Value>(), unknown_user.json::<Value>());
    assert_eq!(wrong_password.json::<Value>()["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_me_with_valid_token() {
    let app = TestApp::new().await;
    let token = registered_token(&app.server, "alice", "pw123").await;
    let (name, value) = auth_header(&token);

    let response = app.server.get("/users/me").add_header(name, value).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "username": "alice" }));
}

#[tokio::test]
async fn test_me_is_idempotent() {
    let app = TestApp::new().await;
    let token = registered_token(&app.server, "alice", "pw123").await;

    for _ in 0..3 {
        let (name, value) = auth_header(&token);
        let response = app.server.get("/users/me").add_header(name, value).await;
        assert_eq!(response.json::<Value>()["username"], "alice");
    }
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::new().await;
    let response = app.server.get("/users/me").await;
    assert_unauthenticated!(response);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = TestApp::new().await;
    let (name, value) = auth_header("garbage");
    let response = app.server.get("/users/me").add_header(name, value).await;
    assert_unauthenticated!(response);
}

#[tokio::test]
async fn test_me_with_non_bearer_scheme() {
    let app = TestApp::new().await;
    let token = registered_token(&app.server, "alice", "pw123").await;

    let response = app
        .server
        .get("/users/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Token {}", token)).unwrap(),
        )
        .await;
    assert_unauthenticated!(response);
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let app = TestApp::new().await;
    register_user(&app.server, "alice", "pw123").await;

    let (name, value) = auth_header(&expired_token("alice"));
    let response = app.server.get("/users/me").add_header(name, value).await;
    assert_unauthenticated!(response);
}

#[tokio::test]
async fn test_me_with_forged_token() {
    let app = TestApp::new().await;
    register_user(&app.server, "alice", "pw123").await;

    let forger = reportdesk::backend::auth::sessions::TokenCodec::new(
        b"not-the-server-secret",
        jsonwebtoken::Algorithm::HS256,
        chrono::Duration::minutes(30),
    )
    .unwrap();
    let forged = forger.issue("alice", chrono::Duration::minutes(30)).unwrap();

    let (name, value) = auth_header(&forged);
    let response = app.server.get("/users/me").add_header(name, value).await;
    assert_unauthenticated!(response);
}

#[tokio::test]
async fn test_token_for_deleted_user_rejected() {
    let app = TestApp::new().await;
    let token = registered_token(&app.server, "alice", "pw123").await;

    sqlx::query("DELETE FROM users WHERE username = 'alice'")
        .execute(app.pool())
        .await
        .unwrap();

    let (name, value) = auth_header(&token);
    let response = app.server.get("/users/me").add_header(name, value).await;
    assert_unauthenticated!(response);
}

#[tokio::test]
async fn test_token_for_never_registered_subject_rejected() {
    let app = TestApp::new().await;
    let token = test_codec().issue("ghost", chrono::Duration::minutes(30)).unwrap();

    let (name, value) = auth_header(&token);
    let response = app.server.get("/users/me").add_header(name, value).await;
    assert_unauthenticated!(response);
}

#[tokio::test]
async fn test_root_is_public() {
    let app = TestApp::new().await;
    let response = app.server.get("/").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>()["message"], "Welcome to the Report Desk API");
}

//! Report layout API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{auth_header, expired_token, registered_token, TestApp};

fn quarterly() -> Value {
    json!({
        "name": "Quarterly",
        "sections": [
            { "name": "chart", "position": "0-0", "content": "revenue" },
            { "name": "text", "position": "0-1", "content": "summary" }
        ]
    })
}

async fn create(app: &TestApp, token: &str, body: &Value) -> i64 {
    let (name, value) = auth_header(token);
    let response = app
        .server
        .post("/report-layout")
        .add_header(name, value)
        .json(body)
        .await;

    assert_status!(response, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Report layout created successfully");
    body["layout_id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_and_read_layout() {
    let app = TestApp::new().await;
    let token = registered_token(&app.server, "alice", "pw123").await;
    let id = create(&app, &token, &quarterly()).await;

    let (name, value) = auth_header(&token);
    let response = app
        .server
        .get(&format!("/report-layout/{}", id))
        .add_header(name, value)
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "user": "alice",
            "layout": {
                "id": id,
                "name": "Quarterly",
                "sections": quarterly()["sections"]
            }
        })
    );
}

#[tokio::test]
async fn test_first_layout() {
    let app = TestApp::new().await;
    let token = registered_token(&app.server, "alice", "pw123").await;
    let first = create(&app, &token, &quarterly()).await;
    create(&app, &token, &json!({ "name": "Second", "sections": [] })).await;

    let (name, value) = auth_header(&token);
    let response = app.server.get("/report-layout").add_header(name, value).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>()["layout"]["id"], first);
}

#[tokio::test]
async fn test_first_layout_missing() {
    let app = TestApp::new().await;
    let token = registered_token(&app.server, "alice", "pw123").await;

    let (name, value) = auth_header(&token);
    let response = app.server.get("/report-layout").add_header(name, value).await;

    assert_status!(response, StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Layout not found for this user");
}

#[tokio::test]
async fn test_edit_layout() {
    let app = TestApp::new().await;
    let token = registered_token(&app.server, "alice", "pw123").await;
    let id = create(&app, &token, &quarterly()).await;

    let edit = json!({
        "name": "Quarterly v2",
        "sections": [{ "name": "table", "position": "1-1", "content": "costs" }]
    });
    let (name, value) = auth_header(&token);
    let response = app
        .server
        .post(&format!("/report-layout/{}", id))
        .add_header(name, value)
        .json(&edit)
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Report layout edit successfully", "layout_id": id })
    );

    let (name, value) = auth_header(&token);
    let response = app
        .server
        .get(&format!("/report-layout/{}", id))
        .add_header(name, value)
        .await;
    let layout = &response.json::<Value>()["layout"];
    assert_eq!(layout["name"], "Quarterly v2");
    assert_eq!(layout["sections"], edit["sections"]);
}

#[tokio::test]
async fn test_layouts_are_private() {
    let app = TestApp::new().await;
    let alice = registered_token(&app.server, "alice", "pw123").await;
    let bob = registered_token(&app.server, "bob", "hunter2").await;
    let id = create(&app, &alice, &quarterly()).await;

    let (name, value) = auth_header(&bob);
    let read = app
        .server
        .get(&format!("/report-layout/{}", id))
        .add_header(name, value)
        .await;
    assert_status!(read, StatusCode::NOT_FOUND);

    let (name, value) = auth_header(&bob);
    let edit = app
        .server
        .post(&format!("/report-layout/{}", id))
        .add_header(name, value)
        .json(&json!({ "name": "Bob's now", "sections": [] }))
        .await;
    assert_status!(edit, StatusCode::NOT_FOUND);

    let (name, value) = auth_header(&alice);
    let response = app
        .server
        .get(&format!("/report-layout/{}", id))
        .add_header(name, value)
        .await;
    assert_eq!(response.json::<Value>()["layout"]["name"], "Quarterly");
}

#[tokio::test]
async fn test_blank_name_rejected() {
    let app = TestApp::new().await;
    let token = registered_token(&app.server, "alice", "pw123").await;

    let (name, value) = auth_header(&token);
    let response = app
        .server
        .post("/report-layout")
        .add_header(name, value)
        .json(&json!({ "name": "   ", "sections": [] }))
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_layout_routes_require_token() {
    let app = TestApp::new().await;
    registered_token(&app.server, "alice", "pw123").await;

    let response = app.server.get("/report-layout").await;
    assert_unauthenticated!(response);

    let response = app.server.post("/report-layout").json(&quarterly()).await;
    assert_unauthenticated!(response);

    let (name, value) = auth_header(&expired_token("alice"));
    let response = app.server.get("/report-layout/1").add_header(name, value).await;
    assert_unauthenticated!(response);
}

/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * 1. Protected routes get `auth_middleware` as a route layer, so unknown
 *    paths fall through to the 404 fallback instead of a 401
 * 2. `TraceLayer` logs every request and response
 * 3. `CorsLayer::permissive()` allows any origin, method and header
 */

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::routes::api_routes::{configure_api_routes, configure_protected_api_routes};
use crate::backend::routes::layout_routes::configure_layout_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// ## Public
///
/// - `GET /` - Welcome message
/// - `POST /register` - User registration
/// - `POST /token` - Login
///
/// ## Protected
///
/// - `GET /users/me` - Current user
/// - `POST /report-layout`, `GET /report-layout` - Create, read first
/// - `GET /report-layout/{id}`, `POST /report-layout/{id}` - Read, edit
///
/// ## Fallback
///
/// Unknown routes return a JSON 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let public = configure_api_routes(Router::new().route("/", get(root)));

    let protected = configure_layout_routes(configure_protected_api_routes(Router::new()))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    public
        .merge(protected)
        .fallback(|| async { BackendError::not_found("Not Found") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Report Desk API" }))
}

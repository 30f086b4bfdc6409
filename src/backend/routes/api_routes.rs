/**
 * API Route Handlers
 *
 * This module wires the authentication endpoints.
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - User registration (also reachable as `/register/`)
 * - `POST /token` - Exchange credentials for a bearer token
 *
 * ## Protected
 * - `GET /users/me` - Current user info
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::server::state::AppState;

/// Add the public authentication routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/register/", post(register))
        .route("/token", post(login))
}

/// Add the authentication routes that require a bearer token
///
/// The caller is responsible for layering the auth middleware over them.
pub fn configure_protected_api_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/users/me", get(get_me))
}

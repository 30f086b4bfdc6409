//! Report layout routes
//!
//! All of them require a bearer token; see `router::create_router`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::layouts::{create_layout, edit_layout, get_first_layout, get_layout_by_id};
use crate::backend::server::state::AppState;

/// Add the `/report-layout` routes
pub fn configure_layout_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/report-layout", post(create_layout).get(get_first_layout))
        .route("/report-layout/{layout_id}", get(get_layout_by_id).post(edit_layout))
}

/**
 * Get Current User Handler
 *
 * GET /users/me returns the username of the caller. The route sits behind
 * the authorization gate, so by the time this runs the identity has already
 * been resolved.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// { "username": "alice" }
/// ```
pub async fn get_me(AuthUser(user): AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        username: user.username,
    })
}

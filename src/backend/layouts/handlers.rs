/**
 * Report Layout Handlers
 *
 * HTTP handlers for the `/report-layout` routes. All of them sit behind the
 * authorization gate and act only on layouts owned by the caller.
 *
 * # Routes
 *
 * - `POST /report-layout` - Create a layout
 * - `GET /report-layout` - Read the caller's first layout
 * - `GET /report-layout/{id}` - Read one layout
 * - `POST /report-layout/{id}` - Replace a layout's name and sections
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::layouts::db;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::{LayoutEnvelope, LayoutSavedResponse, ReportLayoutRequest};

const LAYOUT_NOT_FOUND: &str = "Layout not found for this user";

/// Create a report layout for the caller
///
/// # Errors
///
/// * `400 Bad Request` - If the name is empty or too long
/// * `401 Unauthorized` - If the caller is not authenticated
pub async fn create_layout(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<ReportLayoutRequest>,
) -> Result<Json<LayoutSavedResponse>, BackendError> {
    request.validate()?;

    let layout_id = db::create_layout(&pool, user.user_id, &request.name, &request.sections)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create layout for {}: {}", user.username, e);
            e
        })?;

    tracing::info!("Layout {} created by {}", layout_id, user.username);

    Ok(Json(LayoutSavedResponse {
        message: "Report layout created successfully".to_string(),
        layout_id,
    }))
}

/// Read the caller's first layout
pub async fn get_first_layout(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<LayoutEnvelope>, BackendError> {
    let row = db::get_first_layout(&pool, user.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(LAYOUT_NOT_FOUND))?;

    Ok(Json(LayoutEnvelope {
        user: user.username,
        layout: row.into_view()?,
    }))
}

/// Read one of the caller's layouts
///
/// A layout owned by someone else is reported as not found.
pub async fn get_layout_by_id(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(layout_id): Path<i64>,
) -> Result<Json<LayoutEnvelope>, BackendError> {
    let row = db::get_layout(&pool, user.user_id, layout_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!("Layout {} not visible to {}", layout_id, user.username);
            BackendError::not_found(LAYOUT_NOT_FOUND)
        })?;

    Ok(Json(LayoutEnvelope {
        user: user.username,
        layout: row.into_view()?,
    }))
}

/// Replace the name and sections of one of the caller's layouts
///
/// The edit is a full replacement, `report_name` included. A client that
/// only changes sections must send the current name back unchanged.
pub async fn edit_layout(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(layout_id): Path<i64>,
    Json(request): Json<ReportLayoutRequest>,
) -> Result<Json<LayoutSavedResponse>, BackendError> {
    request.validate()?;

    let updated = db::update_layout(&pool, user.user_id, layout_id, &request.name, &request.sections).await?;
    if !updated {
        return Err(BackendError::not_found(LAYOUT_NOT_FOUND));
    }

    tracing::info!("Layout {} edited by {}", layout_id, user.username);

    Ok(Json(LayoutSavedResponse {
        message: "Report layout edit successfully".to_string(),
        layout_id,
    }))
}

//! Database operations for report layouts
//!
//! Every query is scoped by the owning user's id: a layout that exists but
//! belongs to someone else is indistinguishable from one that does not exist.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::error::StoreError;
use crate::shared::{LayoutView, Section};

/// Row of the `report_layouts` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportLayoutRow {
    pub id: i64,
    pub user_id: i64,
    pub report_name: String,
    /// Sections serialized as a JSON array
    pub layout_data: String,
    pub created_at: DateTime<Utc>,
}

impl ReportLayoutRow {
    /// Decode the stored sections into the client-facing view.
    pub fn into_view(self) -> Result<LayoutView, StoreError> {
        let sections: Vec<Section> = serde_json::from_str(&self.layout_data)?;
        Ok(LayoutView {
            id: self.id,
            name: self.report_name,
            sections,
        })
    }
}

/// Create a new layout owned by `user_id`
pub async fn create_layout(
    pool: &SqlitePool,
    user_id: i64,
    report_name: &str,
    sections: &[Section],
) -> Result<i64, StoreError> {
    let layout_data = serde_json::to_string(sections)?;

    let result = sqlx::query(
        r#"
        INSERT INTO report_layouts (user_id, report_name, layout_data, created_at)
        VALUES (?, ?, ?, ?)
        "#
    )
    .bind(user_id)
    .bind(report_name)
    .bind(layout_data)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get a layout by id, if `user_id` owns it
pub async fn get_layout(
    pool: &SqlitePool,
    user_id: i64,
    layout_id: i64,
) -> Result<Option<ReportLayoutRow>, StoreError> {
    let row = sqlx::query_as::<_, ReportLayoutRow>(
        r#"
        SELECT id, user_id, report_name, layout_data, created_at
        FROM report_layouts
        WHERE id = ? AND user_id = ?
        "#
    )
    .bind(layout_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Get the oldest layout `user_id` owns
pub async fn get_first_layout(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<ReportLayoutRow>, StoreError> {
    let row = sqlx::query_as::<_, ReportLayoutRow>(
        r#"
        SELECT id, user_id, report_name, layout_data, created_at
        FROM report_layouts
        WHERE user_id = ?
        ORDER BY id ASC
        LIMIT 1
        "#
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Replace name and sections of a layout
///
/// Returns `false` if no layout with that id belongs to `user_id`.
pub async fn update_layout(
    pool: &SqlitePool,
    user_id: i64,
    layout_id: i64,
    report_name: &str,
    sections: &[Section],
) -> Result<bool, StoreError> {
    let layout_data = serde_json::to_string(sections)?;

    let result = sqlx::query(
        r#"
        UPDATE report_layouts
        SET report_name = ?, layout_data = ?
        WHERE id = ? AND user_id = ?
        "#
    )
    .bind(report_name)
    .bind(layout_data)
    .bind(layout_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

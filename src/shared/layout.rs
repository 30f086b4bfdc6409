//! Report layout payloads
//!
//! A report layout is a named, ordered list of sections. Clients send a
//! [`ReportLayoutRequest`] to create or replace a layout and receive a
//! [`LayoutEnvelope`] when reading one back. The section list is stored as a
//! JSON array, so its order is preserved exactly as submitted.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Longest report name accepted, matching the width of the original column.
pub const MAX_REPORT_NAME_LEN: usize = 255;

/// One section of a report layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section type, e.g. `"chart"` or `"text"`
    pub name: String,
    /// Grid position encoded by the client as `"<x>-<y>"`
    pub position: String,
    /// Free-form section content
    pub content: String,
}

/// Body of `POST /report-layout` and `POST /report-layout/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLayoutRequest {
    /// Report name
    pub name: String,
    /// Sections in display order
    pub sections: Vec<Section>,
}

impl ReportLayoutRequest {
    /// Check the request before it is persisted.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.name.trim().is_empty() {
            return Err(SharedError::validation("name", "Report name cannot be empty"));
        }
        if self.name.chars().count() > MAX_REPORT_NAME_LEN {
            return Err(SharedError::validation(
                "name",
                format!("Report name must be at most {} characters", MAX_REPORT_NAME_LEN),
            ));
        }
        Ok(())
    }
}

/// A stored layout as returned to its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutView {
    pub id: i64,
    pub name: String,
    pub sections: Vec<Section>,
}

/// Response of the layout read endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEnvelope {
    /// Username of the owner
    pub user: String,
    pub layout: LayoutView,
}

/// Response of the layout create and edit endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSavedResponse {
    pub message: String,
    pub layout_id: i64,
}

//! Report layout storage
//!
//! Per-user report layouts: a name plus an ordered list of sections, stored
//! in the `report_layouts` table.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_layout, edit_layout, get_first_layout, get_layout_by_id};

//! Entry model. Entries live in the `GRAPHY` table.

use graphy_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `GRAPHY` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub title: String,
    /// Stored filename of the cover image in the image directory.
    pub image_path: String,
}

/// DTO for creating a new entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntry {
    pub title: String,
    pub image_path: String,
}

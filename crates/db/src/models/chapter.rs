//! Chapter model. Chapters live in the `CHAPTER` table.

use graphy_core::chapters::ChapterDraft;
use graphy_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `CHAPTER` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Chapter {
    pub id: DbId,
    pub heading: String,
    pub description: String,
    /// Stored filename of the chapter video in the video directory.
    pub video_path: String,
    #[sqlx(rename = "graphy_id")]
    pub entry_id: DbId,
}

/// DTO for creating a new chapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateChapter {
    pub heading: String,
    pub description: String,
    pub video_path: String,
    pub entry_id: DbId,
}

impl CreateChapter {
    /// Build the row for an extracted chapter belonging to `entry_id`.
    pub fn from_draft(draft: &ChapterDraft, entry_id: DbId) -> Self {
        Self {
            heading: draft.heading.clone(),
            description: draft.description.clone(),
            video_path: draft.video_filename.clone(),
            entry_id,
        }
    }
}

//! Repository for the `CHAPTER` table.

use graphy_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::chapter::{Chapter, CreateChapter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, heading, description, video_path, graphy_id";

/// Provides insert and per-entry listing for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new chapter.
    ///
    /// Fails with a foreign key violation if `entry_id` does not exist.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateChapter,
    ) -> Result<Chapter, sqlx::Error> {
        let query = format!(
            "INSERT INTO CHAPTER (heading, description, video_path, graphy_id)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(&input.heading)
            .bind(&input.description)
            .bind(&input.video_path)
            .bind(input.entry_id)
            .fetch_one(conn)
            .await
    }

    /// List the chapters of an entry in the order they were inserted.
    ///
    /// An unknown `entry_id` yields an empty list.
    pub async fn list_by_entry(
        conn: &mut SqliteConnection,
        entry_id: DbId,
    ) -> Result<Vec<Chapter>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM CHAPTER WHERE graphy_id = ? ORDER BY id ASC");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(entry_id)
            .fetch_all(conn)
            .await
    }
}

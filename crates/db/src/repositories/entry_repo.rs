//! Repository for the `GRAPHY` table.

use graphy_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::entry::{CreateEntry, Entry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, image_path";

/// Provides insert and lookup operations for entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry, returning the created row with its assigned id.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateEntry,
    ) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO GRAPHY (title, image_path) VALUES (?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(&input.title)
            .bind(&input.image_path)
            .fetch_one(conn)
            .await
    }

    /// Find an entry by its id.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM GRAPHY WHERE id = ?");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Whether an entry with the given id exists.
    pub async fn exists(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM GRAPHY WHERE id = ?)")
            .bind(id)
            .fetch_one(conn)
            .await?;
        Ok(row.0 != 0)
    }

    /// List every entry in creation order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM GRAPHY ORDER BY id ASC");
        sqlx::query_as::<_, Entry>(&query).fetch_all(conn).await
    }
}

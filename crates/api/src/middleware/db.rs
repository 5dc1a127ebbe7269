//! Per-request database connection extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::Sqlite;

use crate::error::AppError;
use crate::state::AppState;

/// A pooled connection scoped to one request.
///
/// Handlers that touch the database take this as an extractor parameter. The
/// connection is checked out when the handler runs and returned to the pool
/// when the value is dropped, whether the handler succeeds or fails.
///
/// ```ignore
/// async fn my_handler(mut db: DbConn) -> AppResult<Json<Vec<Entry>>> {
///     Ok(Json(EntryRepo::list(&mut db).await?))
/// }
/// ```
pub struct DbConn(pub PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbConn {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(DbConn(state.pool.acquire().await?))
    }
}

impl std::ops::Deref for DbConn {
    type Target = sqlx::SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

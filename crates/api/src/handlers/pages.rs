//! Handlers for the static pages and the entry listing.

use graphy_db::repositories::EntryRepo;

use crate::error::AppResult;
use crate::middleware::db::DbConn;
use crate::views::View;

/// GET /
pub async fn landing() -> View {
    View::Landing
}

/// GET /create
pub async fn create() -> View {
    View::Create { message: None }
}

/// GET /explore
///
/// Every entry, oldest first. No pagination.
pub async fn explore(mut db: DbConn) -> AppResult<View> {
    let entries = EntryRepo::list(&mut db).await?;
    Ok(View::Explore {
        graphies: entries.into_iter().map(Into::into).collect(),
    })
}

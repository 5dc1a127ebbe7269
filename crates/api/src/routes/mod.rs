pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{chapter, entry, media, pages};
use crate::state::AppState;

/// Build the page, upload and media route tree.
///
/// ```text
/// GET  /                             landing
/// GET  /create                       create form
/// GET  /explore                      entry listing
/// GET  /image/{filename}             cover image file
/// GET  /chapters/video/{filename}    chapter video file
/// POST /upload                       create entry (multipart)
/// POST /upload-chapter/{entry_id}    add chapters (multipart), redirects
/// GET  /chapters/{entry_id}          chapter listing
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::landing))
        .route("/create", get(pages::create))
        .route("/explore", get(pages::explore))
        .route("/image/{filename}", get(media::send_image))
        .route("/chapters/video/{filename}", get(media::send_video))
        .route("/upload", post(entry::upload))
        .route("/upload-chapter/{entry_id}", post(chapter::upload_chapter))
        .route("/chapters/{entry_id}", get(chapter::list_by_entry))
}

//! Handlers serving stored media files.

use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::response::Response;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::error::AppResult;
use crate::media::MediaKind;
use crate::state::AppState;

/// GET /image/{filename}
pub async fn send_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> AppResult<Response> {
    serve(&state, MediaKind::Image, &filename, request).await
}

/// GET /chapters/video/{filename}
///
/// Range requests are honoured so players can seek.
pub async fn send_video(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> AppResult<Response> {
    serve(&state, MediaKind::Video, &filename, request).await
}

async fn serve(
    state: &AppState,
    kind: MediaKind,
    filename: &str,
    request: Request,
) -> AppResult<Response> {
    let path = state.media.resolve(kind, filename).await?;
    let response = ServeFile::new(path)
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});
    Ok(response.map(Body::new))
}

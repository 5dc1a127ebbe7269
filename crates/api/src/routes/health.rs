//! Liveness endpoint reporting database and media store readiness.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::media::MediaKind;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when every dependency is usable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Both media directories exist and are directories.
    pub media_healthy: bool,
}

async fn is_dir(path: &std::path::Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = graphy_db::health_check(&state.pool).await.is_ok();
    let media_healthy = is_dir(state.media.dir(MediaKind::Image)).await
        && is_dir(state.media.dir(MediaKind::Video)).await;

    if !media_healthy {
        tracing::warn!("Media directories missing");
    }

    Json(HealthReport {
        status: if db_healthy && media_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        media_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

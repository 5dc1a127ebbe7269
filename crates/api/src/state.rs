use std::sync::Arc;

use crate::config::ServerConfig;
use crate::media::MediaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: graphy_db::DbPool,
    /// Server configuration. The router reads body limit, timeout and CORS
    /// origins from here.
    pub config: Arc<ServerConfig>,
    /// Filesystem store for uploaded images and videos.
    pub media: Arc<MediaStore>,
}

use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite database URL.
    pub database_url: String,
    /// Directory holding uploaded cover images.
    pub image_dir: PathBuf,
    /// Directory holding uploaded chapter videos.
    pub video_dir: PathBuf,
    /// Largest accepted request body, in bytes. Uploads carry whole videos.
    pub max_upload_bytes: usize,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `5000`                           |
    /// | `DATABASE_URL`         | `sqlite://sqlite_db/database.db` |
    /// | `IMAGE_DIR`            | `static/images`                  |
    /// | `VIDEO_DIR`            | `static/videos`                  |
    /// | `MAX_UPLOAD_BYTES`     | `536870912` (512 MiB)            |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://sqlite_db/database.db".into());

        let image_dir = std::env::var("IMAGE_DIR")
            .unwrap_or_else(|_| "static/images".into())
            .into();

        let video_dir = std::env::var("VIDEO_DIR")
            .unwrap_or_else(|_| "static/videos".into())
            .into();

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (512 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            image_dir,
            video_dir,
            max_upload_bytes,
            cors_origins,
            request_timeout_secs,
        }
    }
}

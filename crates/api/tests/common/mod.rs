#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use graphy_api::config::ServerConfig;
use graphy_api::media::MediaStore;
use graphy_api::router::build_app_router;
use graphy_api::state::AppState;

/// Boundary used by every multipart body built in tests.
const BOUNDARY: &str = "graphy-test-boundary";

/// Build a test `ServerConfig` with safe defaults, storing media under `root`.
pub fn test_config(root: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        image_dir: root.join("images"),
        video_dir: root.join("videos"),
        max_upload_bytes: 16 * 1024 * 1024,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// The router under test plus the temporary media directory backing it.
///
/// The directory is removed when the value is dropped, so keep it alive for
/// the whole test.
pub struct TestApp {
    pub router: Router,
    pub media_root: TempDir,
}

impl TestApp {
    pub fn image_path(&self, name: &str) -> PathBuf {
        self.media_root.path().join("images").join(name)
    }

    pub fn video_path(&self, name: &str) -> PathBuf {
        self.media_root.path().join("videos").join(name)
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        send(self.router.clone(), Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_multipart(&self, uri: &str, form: MultipartBody) -> Response<Body> {
        let request = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(form.finish()))
            .unwrap();
        send(self.router.clone(), request).await
    }
}

/// Build the full application router, using the given database pool and a
/// fresh temporary media directory.
///
/// Goes through `build_app_router` so integration tests exercise the same
/// middleware stack that production uses.
pub async fn build_test_app(pool: SqlitePool) -> TestApp {
    let media_root = tempfile::tempdir().unwrap();
    let config = test_config(media_root.path());

    let media = MediaStore::new(&config.image_dir, &config.video_dir);
    media.ensure_dirs().await.unwrap();

    let state = AppState {
        pool,
        config: Arc::new(config),
        media: Arc::new(media),
    };

    TestApp {
        router: build_app_router(state),
        media_root,
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Minimal `multipart/form-data` body builder.
#[derive(Default)]
pub struct MultipartBody {
    buf: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(bytes);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.buf
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.buf
    }
}

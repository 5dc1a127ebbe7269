//! HTTP-level tests for serving stored images and videos.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_bytes, build_test_app, send, MultipartBody};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn uploaded_media_is_served_back(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    let form = MultipartBody::new()
        .text("title", "Trip")
        .file("photo", "cover.png", b"png-bytes")
        .text("chp_title1", "Day 1")
        .text("chp_description1", "desc")
        .file("chp_video1", "clip.mp4", b"0123456789");
    let response = app.post_multipart("/upload", form).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let image = app.get("/image/cover.png").await;
    assert_eq!(image.status(), StatusCode::OK);
    assert_eq!(image.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(body_bytes(image).await, b"png-bytes");

    let video = app.get("/chapters/video/clip.mp4").await;
    assert_eq!(video.status(), StatusCode::OK);
    assert_eq!(body_bytes(video).await, b"0123456789");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn video_supports_range_requests(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    std::fs::write(app.video_path("clip.mp4"), b"0123456789").unwrap();

    let request = Request::get("/chapters/video/clip.mp4")
        .header(header::RANGE, "bytes=2-5")
        .body(Body::empty())
        .unwrap();
    let response = send(app.router.clone(), request).await;

    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(body_bytes(response).await, b"2345");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_media_is_404(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    assert_eq!(app.get("/image/nope.png").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        app.get("/chapters/video/nope.mp4").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn images_and_videos_do_not_mix(pool: SqlitePool) {
    let app = build_test_app(pool).await;
    std::fs::write(app.image_path("only-image.png"), b"png").unwrap();

    let response = app.get("/chapters/video/only-image.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn encoded_traversal_is_rejected(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    let response = app.get("/image/..%2Fsecret.png").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

//! HTTP-level tests for adding and listing chapters.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_json, build_test_app, send, MultipartBody};
use graphy_db::models::chapter::CreateChapter;
use graphy_db::models::entry::CreateEntry;
use graphy_db::repositories::{ChapterRepo, EntryRepo};
use serde_json::json;
use sqlx::SqlitePool;

async fn seed_entry(pool: &SqlitePool, title: &str) -> i64 {
    let mut conn = pool.acquire().await.unwrap();
    EntryRepo::create(
        &mut conn,
        &CreateEntry {
            title: title.to_string(),
            image_path: format!("{title}.png"),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_chapters_in_insertion_order(pool: SqlitePool) {
    let entry_id = seed_entry(&pool, "Trip").await;
    {
        let mut conn = pool.acquire().await.unwrap();
        for (heading, video) in [("Day 1", "a.mp4"), ("Day 2", "b.avi")] {
            ChapterRepo::create(
                &mut conn,
                &CreateChapter {
                    heading: heading.to_string(),
                    description: format!("{heading}!"),
                    video_path: video.to_string(),
                    entry_id,
                },
            )
            .await
            .unwrap();
        }
    }
    let app = build_test_app(pool).await;

    let response = app.get(&format!("/chapters/{entry_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "view": "chapters",
            "entry_id": entry_id,
            "chapters": [
                { "heading": "Day 1", "description": "Day 1!", "video_path": "a.mp4" },
                { "heading": "Day 2", "description": "Day 2!", "video_path": "b.avi" },
            ],
        })
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn chapters_of_unknown_entry_is_empty(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    let response = app.get("/chapters/999").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["chapters"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_chapter_redirects_to_listing(pool: SqlitePool) {
    let entry_id = seed_entry(&pool, "Trip").await;
    let app = build_test_app(pool).await;

    let form = MultipartBody::new()
        .text("chp_title1", "Extra")
        .text("chp_description1", "added later")
        .file("chp_video1", "extra.mp4", b"extra");

    let response = app
        .post_multipart(&format!("/upload-chapter/{entry_id}"), form)
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/chapters/{entry_id}")
    );
    assert_eq!(std::fs::read(app.video_path("extra.mp4")).unwrap(), b"extra");

    let listing = body_json(app.get(&format!("/chapters/{entry_id}")).await).await;
    assert_eq!(
        listing["chapters"],
        json!([{ "heading": "Extra", "description": "added later", "video_path": "extra.mp4" }])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn chapters_from_upload_round_trip(pool: SqlitePool) {
    let app = build_test_app(pool).await;

    let form = MultipartBody::new()
        .text("title", "Trip")
        .file("photo", "cover.jpg", b"jpeg")
        .text("chp_title2", "Second")
        .text("chp_description2", "two")
        .file("chp_video2", "two.mp4", b"2")
        .text("chp_title1", "First")
        .text("chp_description1", "one")
        .file("chp_video1", "one.mp4", b"1");
    let created = body_json(app.post_multipart("/upload", form).await).await;
    let entry_id = created["entry_id"].as_i64().unwrap();

    let listing = body_json(app.get(&format!("/chapters/{entry_id}")).await).await;
    assert_eq!(
        listing["chapters"],
        json!([
            { "heading": "First", "description": "one", "video_path": "one.mp4" },
            { "heading": "Second", "description": "two", "video_path": "two.mp4" },
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_chapter_to_unknown_entry_is_404(pool: SqlitePool) {
    let app = build_test_app(pool.clone()).await;

    let form = MultipartBody::new()
        .text("chp_title1", "Orphan")
        .text("chp_description1", "nowhere")
        .file("chp_video1", "orphan.mp4", b"x");

    let response = app.post_multipart("/upload-chapter/4242", form).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    assert!(!app.video_path("orphan.mp4").exists());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_chapter_rejects_bad_extension(pool: SqlitePool) {
    let entry_id = seed_entry(&pool, "Trip").await;
    let app = build_test_app(pool.clone()).await;

    let form = MultipartBody::new()
        .text("chp_title1", "Bad")
        .text("chp_description1", "wrong type")
        .file("chp_video1", "bad.mov", b"x");

    let response = app
        .post_multipart(&format!("/upload-chapter/{entry_id}"), form)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let mut conn = pool.acquire().await.unwrap();
    assert!(ChapterRepo::list_by_entry(&mut conn, entry_id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_chapter_rejects_non_multipart_body(pool: SqlitePool) {
    let entry_id = seed_entry(&pool, "Trip").await;
    let app = build_test_app(pool.clone()).await;

    let request = Request::post(format!("/upload-chapter/{entry_id}"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("chp_title1=Extra"))
        .unwrap();
    let response = send(app.router.clone(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

//! Handlers for the chapters of an entry.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::response::Redirect;
use graphy_core::chapters::ChapterDraft;
use graphy_core::error::CoreError;
use graphy_core::types::DbId;
use graphy_core::upload::validate_chapter_files;
use graphy_db::models::chapter::{Chapter, CreateChapter};
use graphy_db::repositories::{ChapterRepo, EntryRepo};
use sqlx::SqliteConnection;

use crate::error::AppResult;
use crate::form::UploadForm;
use crate::media::{MediaKind, MediaStore};
use crate::middleware::db::DbConn;
use crate::state::AppState;
use crate::views::View;

/// Write the video of every draft in `drafts` to the media store.
///
/// Each video is looked up by the draft's own index, so gaps left by
/// incomplete blocks cannot shift a video onto the wrong chapter. Must run
/// before the transaction is opened.
pub(crate) async fn store_chapter_videos(
    media: &MediaStore,
    form: &UploadForm,
    drafts: &[ChapterDraft],
) -> AppResult<()> {
    for draft in drafts {
        if let Some(video) = form.chapter_video(draft.index) {
            media
                .save(MediaKind::Video, &video.filename, &video.bytes)
                .await?;
        }
    }
    Ok(())
}

/// Insert one chapter row per draft, in ascending index order.
pub(crate) async fn insert_chapters(
    conn: &mut SqliteConnection,
    drafts: &[ChapterDraft],
    entry_id: DbId,
) -> AppResult<Vec<Chapter>> {
    let mut created = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let input = CreateChapter::from_draft(draft, entry_id);
        let chapter = ChapterRepo::create(conn, &input).await?;
        tracing::debug!(
            entry_id,
            index = draft.index,
            chapter_id = chapter.id,
            "Chapter stored"
        );
        created.push(chapter);
    }

    Ok(created)
}

/// POST /upload-chapter/{entry_id}
///
/// Adds the complete chapter blocks of a multipart form to an existing
/// entry, then redirects to its chapter listing. Unknown entries are 404 and
/// files with unsupported extensions are rejected before anything is written.
pub async fn upload_chapter(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Redirect> {
    let form = UploadForm::from_multipart(multipart?).await?;
    validate_chapter_files(form.file_names())?;

    {
        let mut conn = state.pool.acquire().await?;
        if !EntryRepo::exists(&mut conn, entry_id).await? {
            return Err(CoreError::NotFound {
                entity: "Entry",
                id: entry_id,
            }
            .into());
        }
    }

    let drafts = form.chapter_drafts();
    store_chapter_videos(&state.media, &form, &drafts).await?;

    let mut tx = state.pool.begin().await?;
    let chapters = insert_chapters(&mut tx, &drafts, entry_id).await?;

    tx.commit().await?;

    tracing::info!(entry_id, chapter_count = chapters.len(), "Chapters added");
    Ok(Redirect::to(&format!("/chapters/{entry_id}")))
}

/// GET /chapters/{entry_id}
///
/// Chapters in insertion order. An unknown entry yields an empty list.
pub async fn list_by_entry(mut db: DbConn, Path(entry_id): Path<DbId>) -> AppResult<View> {
    let chapters = ChapterRepo::list_by_entry(&mut db, entry_id).await?;
    Ok(View::Chapters {
        entry_id,
        chapters: chapters.into_iter().map(Into::into).collect(),
    })
}

//! Handler for creating entries.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use graphy_core::upload::validate_upload;
use graphy_db::models::entry::CreateEntry;
use graphy_db::repositories::EntryRepo;

use crate::error::AppResult;
use crate::form::UploadForm;
use crate::handlers::chapter::{insert_chapters, store_chapter_videos};
use crate::media::MediaKind;
use crate::state::AppState;
use crate::views::View;

/// POST /upload
///
/// Accepts a multipart form with a `title`, a `photo` file and any number of
/// `chp_title<N>` / `chp_description<N>` / `chp_video<N>` chapter blocks.
///
/// An invalid submission re-renders the create form with a generic message
/// and writes nothing. A body that is not readable multipart counts as
/// invalid too. Otherwise the cover photo and chapter videos are stored
/// first, then the entry and chapter rows are inserted inside one
/// transaction. Files written before the transaction are not removed if the
/// database work fails afterwards.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Response> {
    let form = match multipart {
        Ok(multipart) => UploadForm::from_multipart(multipart).await,
        Err(rejection) => Err(rejection.into()),
    };
    let form = match form {
        Ok(form) => form,
        Err(err) => {
            tracing::info!(error = %err, "Unreadable upload body");
            return Ok(View::invalid_upload().into_response());
        }
    };

    let (title, photo) = match validate_upload(form.title(), form.photo(), form.file_names()) {
        Ok(valid) => valid,
        Err(err) => {
            tracing::info!(error = %err, "Rejected upload");
            return Ok(View::invalid_upload().into_response());
        }
    };

    state
        .media
        .save(MediaKind::Image, &photo.filename, &photo.bytes)
        .await?;

    let drafts = form.chapter_drafts();
    store_chapter_videos(&state.media, &form, &drafts).await?;

    let mut tx = state.pool.begin().await?;

    let entry = EntryRepo::create(
        &mut tx,
        &CreateEntry {
            title: title.to_string(),
            image_path: photo.filename.clone(),
        },
    )
    .await?;

    let chapters = insert_chapters(&mut tx, &drafts, entry.id).await?;

    tx.commit().await?;

    tracing::info!(
        entry_id = entry.id,
        chapter_count = chapters.len(),
        "Entry created"
    );

    Ok(View::Uploaded {
        entry_id: entry.id,
        chapters: chapters.into_iter().map(Into::into).collect(),
    }
    .into_response())
}

//! Collection of multipart form submissions.
//!
//! The upload forms mix plain text fields (`title`, `chp_title<N>`, ...) with
//! file parts (`photo`, `chp_video<N>`). Everything is buffered into an
//! [`UploadForm`] first so the whole submission can be validated before any
//! file is written or row inserted.

use std::collections::BTreeMap;

use axum::extract::Multipart;
use graphy_core::chapters::{extract_chapters, video_key, ChapterDraft};

use crate::error::{AppError, AppResult};

/// Name of the text field carrying the entry title.
pub const TITLE_FIELD: &str = "title";

/// Name of the file field carrying the cover photo.
pub const PHOTO_FIELD: &str = "photo";

/// One uploaded file held in memory.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename as sent by the client.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A fully read multipart submission.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: BTreeMap<String, String>,
    pub files: BTreeMap<String, UploadedFile>,
}

impl UploadForm {
    /// Read every part of `multipart`.
    ///
    /// Parts that carry a filename are files, all others are text. A file
    /// part with an empty filename is what browsers send for a file input the
    /// user left untouched, so it is treated as absent.
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name.is_empty() {
                continue;
            }

            let filename = field.file_name().map(str::to_string);
            match filename {
                Some(filename) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    if filename.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        UploadedFile {
                            filename,
                            bytes: bytes.to_vec(),
                        },
                    );
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get(TITLE_FIELD).map(String::as_str)
    }

    pub fn photo(&self) -> Option<&UploadedFile> {
        self.files.get(PHOTO_FIELD)
    }

    /// The video uploaded for chapter `index`, looked up by its own key.
    pub fn chapter_video(&self, index: u32) -> Option<&UploadedFile> {
        self.files.get(&video_key(index))
    }

    /// Original filenames of every uploaded file.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.values().map(|f| f.filename.as_str())
    }

    /// Complete chapter blocks in ascending index order.
    pub fn chapter_drafts(&self) -> Vec<ChapterDraft> {
        extract_chapters(
            self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            self.files
                .iter()
                .map(|(k, f)| (k.as_str(), f.filename.as_str())),
        )
    }
}

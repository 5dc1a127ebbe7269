//! Filesystem media store.
//!
//! Uploaded files are kept under their original filename in one of two
//! directories, one for cover images and one for chapter videos. Names are
//! not made unique: a second upload with the same name replaces the first.

use std::path::{Path, PathBuf};

use graphy_core::error::CoreError;
use graphy_core::upload::validate_media_filename;

use crate::error::AppResult;

/// Which media directory a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

#[derive(Debug)]
pub struct MediaStore {
    image_dir: PathBuf,
    video_dir: PathBuf,
}

impl MediaStore {
    pub fn new(image_dir: impl Into<PathBuf>, video_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            video_dir: video_dir.into(),
        }
    }

    /// Create both media directories if they do not exist yet.
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.image_dir).await?;
        tokio::fs::create_dir_all(&self.video_dir).await
    }

    pub fn dir(&self, kind: MediaKind) -> &Path {
        match kind {
            MediaKind::Image => &self.image_dir,
            MediaKind::Video => &self.video_dir,
        }
    }

    /// Path a file called `filename` would occupy. The name must be a single
    /// path component.
    pub fn path_for(&self, kind: MediaKind, filename: &str) -> Result<PathBuf, CoreError> {
        validate_media_filename(filename)?;
        Ok(self.dir(kind).join(filename))
    }

    /// Write `bytes` under `filename`, replacing any existing file.
    pub async fn save(
        &self,
        kind: MediaKind,
        filename: &str,
        bytes: &[u8],
    ) -> AppResult<PathBuf> {
        let path = self.path_for(kind, filename)?;
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(
            kind = kind.label(),
            filename,
            size = bytes.len(),
            "Stored media file"
        );
        Ok(path)
    }

    /// Locate an existing file for serving.
    pub async fn resolve(&self, kind: MediaKind, filename: &str) -> Result<PathBuf, CoreError> {
        let path = self.path_for(kind, filename)?;
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => Err(CoreError::MediaNotFound(filename.to_string())),
        }
    }
}

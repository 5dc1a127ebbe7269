//! Upload validation.
//!
//! An upload is checked as a whole before anything is written: a missing
//! title or cover photo, or any file with an unsupported extension, rejects
//! the entire submission.

use crate::error::CoreError;

/// File extensions accepted for cover photos and chapter videos.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".mp4", ".avi"];

/// Message shown on the create form when a submission is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "The input data is not correct!";

/// Extension of `filename`, including the leading dot.
///
/// Only the final path component is considered. Leading dots do not start
/// an extension, so `.avi` has none while `clip.tar.mp4` has `.mp4`.
///
/// ```
/// use graphy_core::upload::file_extension;
///
/// assert_eq!(file_extension("cover.jpg"), Some(".jpg"));
/// assert_eq!(file_extension(".avi"), None);
/// assert_eq!(file_extension("README"), None);
/// ```
pub fn file_extension(filename: &str) -> Option<&str> {
    let base = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);
    let stem_len = base.len() - base.trim_start_matches('.').len();
    let dot = base[stem_len..].rfind('.')? + stem_len;
    Some(&base[dot..])
}

/// Whether `filename` ends in one of [`ALLOWED_EXTENSIONS`]. Case-sensitive.
pub fn has_allowed_extension(filename: &str) -> bool {
    file_extension(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext))
}

/// Check that `name` can be stored as a single file inside a media directory.
pub fn validate_media_filename(name: &str) -> Result<(), CoreError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0'])
    {
        return Err(CoreError::Validation(format!(
            "Invalid media filename '{name}'"
        )));
    }
    Ok(())
}

/// Check the name of one uploaded file.
pub fn validate_upload_file(filename: &str) -> Result<(), CoreError> {
    validate_media_filename(filename)?;
    if !has_allowed_extension(filename) {
        return Err(CoreError::Validation(format!(
            "Unsupported file type '{filename}'. Allowed: {ALLOWED_EXTENSIONS:?}"
        )));
    }
    Ok(())
}

/// Validate a new-entry submission before any side effect.
///
/// `filenames` lists every uploaded file, photo included. Chapters are
/// optional, so chapter fields are not inspected here beyond their files.
/// On success the title and photo are handed back unwrapped.
pub fn validate_upload<'a, 't, P>(
    title: Option<&'t str>,
    photo: Option<P>,
    filenames: impl IntoIterator<Item = &'a str>,
) -> Result<(&'t str, P), CoreError> {
    validate_chapter_files(filenames)?;

    let title = match title {
        Some(t) if !t.is_empty() => t,
        _ => return Err(CoreError::Validation("Missing title".into())),
    };
    let photo = photo.ok_or_else(|| CoreError::Validation("Missing cover photo".into()))?;
    Ok((title, photo))
}

/// Validate the files of an add-chapter submission.
pub fn validate_chapter_files<'a>(
    filenames: impl IntoIterator<Item = &'a str>,
) -> Result<(), CoreError> {
    filenames.into_iter().try_for_each(validate_upload_file)
}

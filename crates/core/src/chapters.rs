//! Chapter extraction from flat form submissions.
//!
//! The create form sends one block of fields per chapter, suffixed with a
//! client-assigned index: `chp_title<N>`, `chp_description<N>` and the file
//! part `chp_video<N>`. Extraction regroups those by `N` and keeps only the
//! blocks that were filled in completely.

use std::collections::BTreeMap;

/// Prefix of the text field holding a chapter heading.
pub const TITLE_PREFIX: &str = "chp_title";

/// Prefix of the text field holding a chapter description.
pub const DESCRIPTION_PREFIX: &str = "chp_description";

/// Prefix of the file field holding a chapter video.
pub const VIDEO_PREFIX: &str = "chp_video";

/// Which part of a chapter block a form key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterField {
    Title,
    Description,
    Video,
}

/// Split a form key into its chapter field and numeric index.
///
/// Returns `None` for keys that are not chapter keys, including keys with a
/// missing or non-numeric suffix (`chp_title`, `chp_titleX`).
///
/// ```
/// use graphy_core::chapters::{parse_chapter_key, ChapterField};
///
/// assert_eq!(parse_chapter_key("chp_title3"), Some((ChapterField::Title, 3)));
/// assert_eq!(parse_chapter_key("chp_video12"), Some((ChapterField::Video, 12)));
/// assert_eq!(parse_chapter_key("title"), None);
/// ```
pub fn parse_chapter_key(key: &str) -> Option<(ChapterField, u32)> {
    let (field, suffix) = if let Some(rest) = key.strip_prefix(TITLE_PREFIX) {
        (ChapterField::Title, rest)
    } else if let Some(rest) = key.strip_prefix(DESCRIPTION_PREFIX) {
        (ChapterField::Description, rest)
    } else if let Some(rest) = key.strip_prefix(VIDEO_PREFIX) {
        (ChapterField::Video, rest)
    } else {
        return None;
    };

    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok().map(|index| (field, index))
}

/// Form key of the video file for chapter `index`.
pub fn video_key(index: u32) -> String {
    format!("{VIDEO_PREFIX}{index}")
}

/// A complete chapter block recovered from a form submission.
///
/// `index` is the client-assigned suffix the block was submitted under. It is
/// carried through so the matching `chp_video<index>` upload can be found
/// again even when earlier blocks were dropped as incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDraft {
    pub index: u32,
    pub heading: String,
    pub description: String,
    pub video_filename: String,
}

impl ChapterDraft {
    /// Form key of this chapter's video upload.
    pub fn video_key(&self) -> String {
        video_key(self.index)
    }
}

#[derive(Default)]
struct PartialChapter<'a> {
    heading: Option<&'a str>,
    description: Option<&'a str>,
    video_filename: Option<&'a str>,
}

/// Rebuild the ordered list of complete chapters from a submission.
///
/// `fields` maps text field names to their values and `files` maps file field
/// names to the uploaded file's original name. Keys that are not chapter keys
/// are ignored. Blocks missing any of heading, description or video are
/// skipped silently. The result is sorted by ascending index.
pub fn extract_chapters<'a, F, V>(fields: F, files: V) -> Vec<ChapterDraft>
where
    F: IntoIterator<Item = (&'a str, &'a str)>,
    V: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut groups: BTreeMap<u32, PartialChapter<'a>> = BTreeMap::new();

    for (key, value) in fields {
        match parse_chapter_key(key) {
            Some((ChapterField::Title, index)) => {
                groups.entry(index).or_default().heading = Some(value);
            }
            Some((ChapterField::Description, index)) => {
                groups.entry(index).or_default().description = Some(value);
            }
            // A text field named like a video key is not an upload.
            Some((ChapterField::Video, _)) | None => {}
        }
    }

    for (key, filename) in files {
        if let Some((ChapterField::Video, index)) = parse_chapter_key(key) {
            groups.entry(index).or_default().video_filename = Some(filename);
        }
    }

    groups
        .into_iter()
        .filter_map(|(index, group)| {
            Some(ChapterDraft {
                index,
                heading: group.heading?.to_string(),
                description: group.description?.to_string(),
                video_filename: group.video_filename?.to_string(),
            })
        })
        .collect()
}

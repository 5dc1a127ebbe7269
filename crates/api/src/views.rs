//! View payloads.
//!
//! Handlers hand plain records to the client-side renderer; markup and
//! escaping are its business. Every view serializes as a JSON object tagged
//! with the view name, e.g. `{"view": "explore", "graphies": [...]}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use graphy_core::types::DbId;
use graphy_core::upload::INVALID_INPUT_MESSAGE;
use graphy_db::models::chapter::Chapter;
use graphy_db::models::entry::Entry;
use serde::Serialize;

/// One entry in the explore listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryCard {
    pub id: DbId,
    pub title: String,
    pub image_name: String,
}

impl From<Entry> for EntryCard {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            image_name: entry.image_path,
        }
    }
}

/// One chapter as shown on the chapter page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterCard {
    pub heading: String,
    pub description: String,
    pub video_path: String,
}

impl From<Chapter> for ChapterCard {
    fn from(chapter: Chapter) -> Self {
        Self {
            heading: chapter.heading,
            description: chapter.description,
            video_path: chapter.video_path,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Landing,
    Create {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Explore {
        graphies: Vec<EntryCard>,
    },
    Uploaded {
        entry_id: DbId,
        chapters: Vec<ChapterCard>,
    },
    Chapters {
        entry_id: DbId,
        chapters: Vec<ChapterCard>,
    },
}

impl View {
    /// The create form re-rendered after a rejected submission.
    pub fn invalid_upload() -> Self {
        View::Create {
            message: Some(INVALID_INPUT_MESSAGE.to_string()),
        }
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        let status = match &self {
            View::Create { message: Some(_) } => StatusCode::BAD_REQUEST,
            View::Uploaded { .. } => StatusCode::CREATED,
            _ => StatusCode::OK,
        };
        (status, Json(self)).into_response()
    }
}

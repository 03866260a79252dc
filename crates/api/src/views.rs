//! View types for page template rendering.
//!
//! These types carry pre-formatted strings (paths, error messages) so the
//! askama templates stay free of logic.

use vidbits_core::types::DbId;
use vidbits_core::validation::ValidationResult;
use vidbits_core::video::{VideoFields, TITLE, URL};
use vidbits_db::models::video::Video;

pub const VIDEOS_PATH: &str = "/videos";
pub const CREATE_PATH: &str = "/videos/create";

pub fn video_path(id: DbId) -> String {
    format!("{VIDEOS_PATH}/{id}")
}

pub fn edit_path(id: DbId) -> String {
    format!("{VIDEOS_PATH}/{id}/edit")
}

pub fn delete_path(id: DbId) -> String {
    format!("{VIDEOS_PATH}/{id}/delete")
}

// ── Video ───────────────────────────────────────────────────────

/// A stored video as shown on the list and show pages.
pub struct VideoView {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub description: String,
    pub show_path: String,
    pub edit_path: String,
    pub delete_path: String,
}

impl From<&Video> for VideoView {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id,
            title: video.title.clone(),
            url: video.url.clone(),
            description: video.description.clone().unwrap_or_default(),
            show_path: video_path(video.id),
            edit_path: edit_path(video.id),
            delete_path: delete_path(video.id),
        }
    }
}

// ── Form ────────────────────────────────────────────────────────

/// The create/edit form with its current values and per-field errors.
///
/// Empty error strings mean the field has no error.
pub struct FormView {
    pub action: String,
    pub submit_label: &'static str,
    pub title: String,
    pub url: String,
    pub description: String,
    pub title_error: String,
    pub url_error: String,
}

impl FormView {
    /// Form pre-filled with `fields`, showing any violations in `errors`.
    pub fn new(
        action: impl Into<String>,
        submit_label: &'static str,
        fields: &VideoFields,
        errors: &ValidationResult,
    ) -> Self {
        let error = |field: &str| errors.message_for(field).unwrap_or_default().to_string();
        Self {
            action: action.into(),
            submit_label,
            title: fields.title.clone().unwrap_or_default(),
            url: fields.url.clone().unwrap_or_default(),
            description: fields.description.clone().unwrap_or_default(),
            title_error: error(TITLE),
            url_error: error(URL),
        }
    }

    /// Empty form with no errors.
    pub fn blank(action: impl Into<String>, submit_label: &'static str) -> Self {
        Self::new(
            action,
            submit_label,
            &VideoFields::default(),
            &ValidationResult::default(),
        )
    }
}

//! Page templates.
//!
//! Each struct binds one askama template under `templates/`. Handlers build
//! them from view types and call [`render`].

use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;
use vidbits_core::types::DbId;

use crate::error::AppResult;
use crate::views::{FormView, VideoView};

/// Render a template into an HTML response body.
pub fn render<T: Template>(tmpl: &T) -> AppResult<Html<String>> {
    Ok(Html(tmpl.render()?))
}

pub const SAVE_LABEL: &str = "Save";
pub const UPDATE_LABEL: &str = "Update";

// ── Videos ──────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "videos/index.html")]
pub struct IndexPage {
    pub videos: Vec<VideoView>,
}

#[derive(Template)]
#[template(path = "videos/create.html")]
pub struct CreatePage {
    pub form: FormView,
}

#[derive(Template)]
#[template(path = "videos/show.html")]
pub struct ShowPage {
    pub video: VideoView,
}

#[derive(Template)]
#[template(path = "videos/edit.html")]
pub struct EditPage {
    pub video_id: DbId,
    pub form: FormView,
}

// ── Errors ──────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub heading: String,
    pub message: String,
}

impl ErrorPage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            heading: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: message.into(),
        }
    }

    pub fn render_html(&self) -> AppResult<Html<String>> {
        render(self)
    }
}

//! Video entity model and DTOs.

use sqlx::FromRow;
use vidbits_core::types::{DbId, Timestamp};
use vidbits_core::video::{ValidVideo, VideoFields};

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Video {
    /// Current stored values, as pre-filled into the edit form.
    pub fn fields(&self) -> VideoFields {
        VideoFields {
            title: Some(self.title.clone()),
            url: Some(self.url.clone()),
            description: self.description.clone(),
        }
    }
}

/// DTO for creating a new video, built from validated fields.
#[derive(Debug, Clone)]
pub struct CreateVideo {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

/// DTO for overwriting an existing video. Every column is replaced.
#[derive(Debug, Clone)]
pub struct UpdateVideo {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

impl From<&ValidVideo> for CreateVideo {
    fn from(valid: &ValidVideo) -> Self {
        Self {
            title: valid.title().to_string(),
            url: valid.url().to_string(),
            description: valid.description().map(str::to_string),
        }
    }
}

impl From<&ValidVideo> for UpdateVideo {
    fn from(valid: &ValidVideo) -> Self {
        Self {
            title: valid.title().to_string(),
            url: valid.url().to_string(),
            description: valid.description().map(str::to_string),
        }
    }
}

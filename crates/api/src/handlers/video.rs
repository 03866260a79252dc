//! Handlers for the `/videos` pages.
//!
//! Writes follow redirect-after-write: a valid submission is persisted and
//! answered with a 302 to the show page. An invalid one is never written;
//! the originating form is re-rendered with the attempted values and the
//! field errors, status 400.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use vidbits_core::error::CoreError;
use vidbits_core::types::DbId;
use vidbits_core::video::VideoFields;
use vidbits_db::models::video::{CreateVideo, UpdateVideo, Video};
use vidbits_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::pages::{render, CreatePage, EditPage, IndexPage, ShowPage, SAVE_LABEL, UPDATE_LABEL};
use crate::response::found;
use crate::state::AppState;
use crate::views::{edit_path, video_path, FormView, VideoView, VIDEOS_PATH};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Video",
        id,
    })
}

async fn find_video(state: &AppState, id: DbId) -> AppResult<Video> {
    VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
pub async fn landing() -> Response {
    found(VIDEOS_PATH)
}

/// GET /videos
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let videos = VideoRepo::list(&state.pool).await?;
    render(&IndexPage {
        videos: videos.iter().map(VideoView::from).collect(),
    })
}

/// GET /videos/create
pub async fn create_form() -> AppResult<Html<String>> {
    render(&CreatePage {
        form: FormView::blank(VIDEOS_PATH, SAVE_LABEL),
    })
}

/// POST /videos
pub async fn create(
    State(state): State<AppState>,
    Form(fields): Form<VideoFields>,
) -> AppResult<Response> {
    let valid = match fields.validated() {
        Ok(valid) => valid,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields(), "Rejected video submission");
            let page = CreatePage {
                form: FormView::new(VIDEOS_PATH, SAVE_LABEL, &fields, &errors),
            };
            return Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response());
        }
    };

    let video = VideoRepo::create(&state.pool, &CreateVideo::from(&valid)).await?;
    tracing::info!(video_id = video.id, "Video created");
    Ok(found(video_path(video.id)))
}

/// GET /videos/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let video = find_video(&state, id).await?;
    render(&ShowPage {
        video: VideoView::from(&video),
    })
}

/// GET /videos/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let video = find_video(&state, id).await?;
    render(&EditPage {
        video_id: id,
        form: FormView::new(
            edit_path(id),
            UPDATE_LABEL,
            &video.fields(),
            &Default::default(),
        ),
    })
}

/// POST /videos/{id}/edit
///
/// Overwrites title, url and description. On validation failure the stored
/// record is left untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(fields): Form<VideoFields>,
) -> AppResult<Response> {
    find_video(&state, id).await?;

    let valid = match fields.validated() {
        Ok(valid) => valid,
        Err(errors) => {
            tracing::debug!(video_id = id, fields = ?errors.fields(), "Rejected video update");
            let page = EditPage {
                video_id: id,
                form: FormView::new(edit_path(id), UPDATE_LABEL, &fields, &errors),
            };
            return Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response());
        }
    };

    // The row can disappear between the lookup and the write.
    let video = VideoRepo::update(&state.pool, id, &UpdateVideo::from(&valid))
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(video_id = video.id, "Video updated");
    Ok(found(video_path(video.id)))
}

/// POST /videos/{id}/delete
///
/// Idempotent: deleting a missing id still redirects to the list.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    if VideoRepo::delete(&state.pool, id).await? {
        tracing::info!(video_id = id, "Video deleted");
    } else {
        tracing::debug!(video_id = id, "Delete requested for missing video");
    }
    Ok(found(VIDEOS_PATH))
}

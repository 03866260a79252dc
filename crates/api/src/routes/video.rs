//! Route definitions for the `/videos` pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /create          -> create_form
/// GET    /{id}            -> show
/// GET    /{id}/edit       -> edit_form
/// POST   /{id}/edit       -> update
/// POST   /{id}/delete     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list).post(video::create))
        .route("/create", get(video::create_form))
        .route("/{id}", get(video::show))
        .route("/{id}/edit", get(video::edit_form).post(video::update))
        .route("/{id}/delete", post(video::delete))
}

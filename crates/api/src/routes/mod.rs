pub mod health;
pub mod video;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /                          redirect to /videos
/// /videos                    list, create (POST)
/// /videos/create             create form
/// /videos/{id}               show
/// /videos/{id}/edit          edit form, update (POST)
/// /videos/{id}/delete        delete (POST)
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::video::landing))
        .nest("/videos", video::router())
}

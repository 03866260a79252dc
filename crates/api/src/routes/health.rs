//! `GET /health`: service liveness plus a summary of the video store.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use vidbits_db::repositories::VideoRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"` when the video store answered, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreReport,
}

#[derive(Debug, Serialize)]
pub struct StoreReport {
    pub reachable: bool,
    /// Stored videos; absent when the store could not be queried.
    pub videos: Option<i64>,
}

impl StoreReport {
    async fn collect(state: &AppState) -> Self {
        match VideoRepo::count(&state.pool).await {
            Ok(count) => Self {
                reachable: true,
                videos: Some(count),
            },
            Err(err) => {
                tracing::warn!(error = %err, "video store unavailable");
                Self {
                    reachable: false,
                    videos: None,
                }
            }
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let store = StoreReport::collect(&state).await;
    Json(HealthReport {
        status: if store.reachable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

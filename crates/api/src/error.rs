use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use vidbits_core::error::CoreError;

use crate::pages::ErrorPage;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds infrastructure variants.
/// Implements [`IntoResponse`] to render a consistent HTML error page.
///
/// Field validation failures are not errors here: handlers re-render the
/// originating form with status 400 instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vidbits_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),
            AppError::Database(sqlx::Error::RowNotFound) => {
                (StatusCode::NOT_FOUND, "Resource not found".to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            AppError::Render(err) => {
                tracing::error!(error = %err, "Template render error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        let page = ErrorPage::new(status, message);
        match page.render_html() {
            Ok(html) => (status, html).into_response(),
            // The error page itself failed; fall back to bare markup.
            Err(_) => (status, Html(format!("<p>{}</p>", page.message))).into_response(),
        }
    }
}

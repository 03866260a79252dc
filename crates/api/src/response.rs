//! Shared response helpers for page handlers.

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// `302 Found` redirect to `location`.
///
/// `axum::response::Redirect` has no 302 constructor.
pub fn found(location: impl Into<String>) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.into())]).into_response()
}

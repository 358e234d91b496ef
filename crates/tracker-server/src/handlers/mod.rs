//! HTTP handlers
//!
//! Every API route answers `200 OK`. A failed operation replaces the
//! expected body with `{"message": "..."}`, so clients tell success from
//! failure by the shape of the payload.

pub mod exercises;
pub mod health;
pub mod logs;
pub mod users;

pub use health::health;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracker_core::TrackerError;

/// Body of an API response
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Reply<T> {
    Data(T),
    Failure { message: String },
}

impl<T> From<Result<T, TrackerError>> for Reply<T> {
    fn from(result: Result<T, TrackerError>) -> Self {
        match result {
            Ok(data) => Reply::Data(data),
            Err(e) => Reply::Failure {
                message: e.message(),
            },
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

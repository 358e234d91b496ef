//! Exercise log handlers

use super::Reply;
use crate::AppState;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracker_core::ExerciseLog;

/// Raw query string; coercion happens in the log service
#[derive(Debug, Deserialize)]
pub struct LogParams {
    from: Option<String>,
    to: Option<String>,
    limit: Option<String>,
}

pub async fn show(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LogParams>,
) -> Reply<ExerciseLog> {
    state
        .logs
        .get_log(
            &user_id,
            params.from.as_deref(),
            params.to.as_deref(),
            params.limit.as_deref(),
        )
        .await
        .into()
}

//! Exercise handlers

use super::Reply;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Form,
};
use serde::Deserialize;
use tracker_core::ExerciseReceipt;

/// Missing text fields arrive as empty strings and are refused by the service
#[derive(Debug, Deserialize)]
pub struct CreateExerciseForm {
    #[serde(default)]
    description: String,
    #[serde(default)]
    duration: String,
    date: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Form(form): Form<CreateExerciseForm>,
) -> Reply<ExerciseReceipt> {
    state
        .exercises
        .add_exercise(
            &user_id,
            &form.description,
            &form.duration,
            form.date.as_deref(),
        )
        .await
        .into()
}

//! User handlers

use super::Reply;
use crate::AppState;
use axum::{extract::State, Form};
use serde::Deserialize;
use tracker_core::UserSummary;

#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    username: String,
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> Reply<UserSummary> {
    state
        .users
        .create_user(&form.username)
        .await
        .map(UserSummary::from)
        .into()
}

pub async fn list(State(state): State<AppState>) -> Reply<Vec<UserSummary>> {
    state
        .users
        .list_users()
        .await
        .map(|users| users.into_iter().map(UserSummary::from).collect::<Vec<_>>())
        .into()
}

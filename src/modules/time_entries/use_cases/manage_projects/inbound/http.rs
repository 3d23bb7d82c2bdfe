use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddProjectBody {
    pub name: String,
}

pub async fn list(State(state): State<AppState>) -> Response {
    let tracker = state.tracker.lock().await;
    Json(tracker.projects()).into_response()
}

/// 201 when the project is new, 200 when it was already known.
pub async fn add(
    State(state): State<AppState>,
    body: Result<Json<AddProjectBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut tracker = state.tracker.lock().await;
    match tracker.add_project(&body.name) {
        Ok(true) => (StatusCode::CREATED, Json(tracker.projects())).into_response(),
        Ok(false) => (StatusCode::OK, Json(tracker.projects())).into_response(),
        Err(error) => error_response(&error),
    }
}

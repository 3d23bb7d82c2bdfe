use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shared::infrastructure::confirmation::AutoConfirm;
use crate::shell::http::{confirmation_required, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartTimerBody {
    pub label: String,
}

#[derive(Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}

pub async fn current(State(state): State<AppState>) -> Response {
    let tracker = state.tracker.lock().await;
    Json(tracker.snapshot()).into_response()
}

pub async fn start(
    State(state): State<AppState>,
    body: Result<Json<StartTimerBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut tracker = state.tracker.lock().await;
    match tracker.start(&body.label) {
        Ok(()) => Json(tracker.snapshot()).into_response(),
        Err(error) => error_response(&error),
    }
}

pub async fn stop(State(state): State<AppState>) -> Response {
    let mut tracker = state.tracker.lock().await;
    match tracker.stop() {
        Some(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn reset(State(state): State<AppState>, Query(params): Query<ConfirmParams>) -> Response {
    let mut tracker = state.tracker.lock().await;
    if tracker.reset(&AutoConfirm(params.confirm)) {
        Json(tracker.snapshot()).into_response()
    } else {
        confirmation_required()
    }
}

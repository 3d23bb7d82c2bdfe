use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::time_entries::core::errors::TrackerError;
use crate::modules::time_entries::use_cases::manage_entries::inbound::http as entries_http;
use crate::modules::time_entries::use_cases::manage_projects::inbound::http as projects_http;
use crate::modules::time_entries::use_cases::track_time::inbound::http as timer_http;
use crate::shell::state::AppState;

pub fn router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    api_router(state)
        .fallback_service(ServeDir::new(assets_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/timer", get(timer_http::current))
        .route("/api/timer/start", post(timer_http::start))
        .route("/api/timer/stop", post(timer_http::stop))
        .route("/api/timer/reset", post(timer_http::reset))
        .route("/api/entries", get(entries_http::list))
        .route(
            "/api/entries/{id}",
            patch(entries_http::update).delete(entries_http::delete),
        )
        .route("/api/summary", get(entries_http::summary))
        .route(
            "/api/projects",
            get(projects_http::list).post(projects_http::add),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        message: "Timetracker is running",
    })
}

pub fn error_response(error: &TrackerError) -> Response {
    let status = match error {
        TrackerError::Validation(_) | TrackerError::NegativeDuration { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        TrackerError::InvalidState { .. } => StatusCode::CONFLICT,
        TrackerError::EntryNotFound(_) => StatusCode::NOT_FOUND,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

/// A destructive request that arrived without `confirm=true`.
pub fn confirmation_required() -> Response {
    (
        StatusCode::PRECONDITION_REQUIRED,
        Json(json!({ "error": "confirmation required, repeat with confirm=true" })),
    )
        .into_response()
}

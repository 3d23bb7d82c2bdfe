use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::duration_format;
use crate::modules::time_entries::use_cases::track_time::inbound::http::ConfirmParams;
use crate::shared::infrastructure::confirmation::AutoConfirm;
use crate::shell::http::{confirmation_required, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DateParams {
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DurationPatch {
    pub duration: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RangePatch {
    pub start_time: i64,
    pub end_time: i64,
}

/// Either a new duration, or a new start/end range. A body mixing both matches neither.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum EntryPatch {
    Duration(DurationPatch),
    Range(RangePatch),
}

#[derive(Serialize)]
pub struct ProjectTotal {
    pub project: String,
    pub duration: u64,
    pub formatted: String,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub date: NaiveDate,
    pub projects: Vec<ProjectTotal>,
}

pub async fn list(State(state): State<AppState>, Query(params): Query<DateParams>) -> Response {
    let tracker = state.tracker.lock().await;
    match params.date {
        Some(date) => Json(tracker.entries_for_date(date)).into_response(),
        None => Json(tracker.entries()).into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<EntryPatch>, JsonRejection>,
) -> Response {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut tracker = state.tracker.lock().await;
    let result = match patch {
        EntryPatch::Duration(DurationPatch { duration }) => tracker.update_entry(id, &duration),
        EntryPatch::Range(RangePatch {
            start_time,
            end_time,
        }) => tracker.update_entry_range(id, start_time, end_time),
    };
    match result {
        Ok(entry) => Json(entry).into_response(),
        Err(error) => error_response(&error),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(params): Query<ConfirmParams>,
) -> Response {
    let mut tracker = state.tracker.lock().await;
    if !tracker.entries().iter().any(|entry| entry.id == id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    if tracker.delete_entry(id, &AutoConfirm(params.confirm)) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        confirmation_required()
    }
}

pub async fn summary(State(state): State<AppState>, Query(params): Query<DateParams>) -> Response {
    let tracker = state.tracker.lock().await;
    let date = params.date.unwrap_or_else(|| tracker.today());
    let projects = tracker
        .summary_for_date(date)
        .into_iter()
        .map(|(project, duration)| ProjectTotal {
            project,
            duration,
            formatted: duration_format::format(duration),
        })
        .collect();
    Json(SummaryResponse { date, projects }).into_response()
}

//! Meeting monitor handlers — status lookup and update.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use tracing::debug;

use crate::dto::request::{StatusQuery, UpdateStatusRequest};
use crate::dto::response::{StatusData, StatusResponse, UpdateResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/monitor/teams?user=<username>
///
/// Unknown users are reported as idle with the default icon, not as an
/// error; the display client has no way to pre-register users.
pub async fn get_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StatusResponse>, ApiError> {
    let username = match query.user.as_deref() {
        Some(user) if !user.is_empty() => user,
        _ => return Err(ApiError::validation("user query parameter is required")),
    };

    let view = state.tracker.status(username).await;

    Ok(Json(StatusResponse {
        status: "success".to_string(),
        data: StatusData {
            user: view.username,
            user_icon_url: view.icon_url,
            in_meeting: view.in_meeting,
            meeting_duration: view.meeting_duration,
        },
        shortcut_url: state.config.presence.shortcut_url.clone(),
    }))
}

/// POST /api/monitor/teams
///
/// Applies a start or stop event for the reporting user and persists
/// the directory index and the individual record.
pub async fn update_status(
    State(state): State<AppState>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    if req.user.is_empty() {
        return Err(ApiError::validation("user must not be empty"));
    }

    debug!(user = %req.user, meeting_status = req.meeting_status, "Received status update");

    state
        .tracker
        .apply_update(&req.user, &req.user_icon_url, req.meeting_status)
        .await?;

    Ok(Json(UpdateResponse {
        status: "success".to_string(),
    }))
}

//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, RunState};
use super::responses::{
    ApiResponse, FocusGoalRequest, HealthResponse, MinutesRequest, StatusResponse,
};

/// Handle POST /start - Toggle the start/pause control
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.toggle_start_pause() {
        Ok((Ok(()), session)) => {
            let message = match session.run_state {
                RunState::Running => "Session running".to_string(),
                _ => "Session paused".to_string(),
            };
            info!("Start endpoint called - session is now {}", session.run_state);
            Ok(Json(ApiResponse::ok(message, session)))
        }
        Ok((Err(e), session)) => {
            // The blocking notification: the minutes field cannot start a
            // session and nothing was changed.
            info!("Start endpoint rejected: {}", e);
            Ok(Json(ApiResponse::error(e.to_string(), session)))
        }
        Err(e) => {
            error!("Failed to toggle start/pause: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Reset the session from the minutes field
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset() {
        Ok(session) => {
            info!("Reset endpoint called - session is now {}", session.run_state);
            Ok(Json(ApiResponse::ok("Session reset".to_string(), session)))
        }
        Err(e) => {
            error!("Failed to reset session: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle PUT /minutes - Update the minutes field
///
/// Takes effect through a reset unless a session is running; a session in
/// progress keeps its duration until the next pause or reset.
pub async fn minutes_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MinutesRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.set_minutes_input(request.minutes) {
        Ok(session) => {
            info!("Minutes field set to {:?}", session.minutes_input);
            Ok(Json(ApiResponse::ok("Minutes updated".to_string(), session)))
        }
        Err(e) => {
            error!("Failed to update minutes field: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle PUT /focus-goal - Update the focus-goal field
pub async fn focus_goal_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FocusGoalRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.set_focus_goal(request.goal) {
        Ok(session) => {
            info!("Focus goal set to {:?}", session.focus_goal);
            Ok(Json(ApiResponse::ok("Focus goal updated".to_string(), session)))
        }
        Err(e) => {
            error!("Failed to update focus goal: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the session snapshot and server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let session = match state.get_snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get session snapshot: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        session,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

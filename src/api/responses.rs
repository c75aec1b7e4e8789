//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::SessionSnapshot;

/// Body of PUT /minutes. The field is free text, exactly like the input
/// it stands in for; validation happens when a session is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinutesRequest {
    pub minutes: String,
}

/// Body of PUT /focus-goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusGoalRequest {
    pub goal: String,
}

/// API response structure for control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub session: SessionSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, session: SessionSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            session,
        }
    }

    /// Create a response for an accepted control action
    pub fn ok(message: String, session: SessionSnapshot) -> Self {
        Self::new("ok".to_string(), message, session)
    }

    /// Create a response for a rejected control action.
    ///
    /// The message is the blocking notification shown to the user; the
    /// snapshot is the unchanged state.
    pub fn error(message: String, session: SessionSnapshot) -> Self {
        Self::new("error".to_string(), message, session)
    }
}

/// Full status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub session: SessionSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/monitor/teams`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Request outcome, `"success"` on 200.
    pub status: String,
    /// The user's presence.
    pub data: StatusData,
    /// URL of the client-side automation shortcut.
    pub shortcut_url: String,
}

/// Presence payload inside [`StatusResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusData {
    /// The queried username.
    pub user: String,
    /// Icon URL to display.
    pub user_icon_url: String,
    /// Whether the user is currently in a meeting.
    pub in_meeting: bool,
    /// Elapsed meeting time as `HH:MM:SS`, `00:00:00` when idle.
    pub meeting_duration: String,
}

/// Body of `POST /api/monitor/teams` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// Request outcome, `"success"` on 200.
    pub status: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Store reachability: `"connected"` or `"unreachable"`.
    pub store: String,
}

//! Request DTOs.

use serde::Deserialize;

/// Query parameters for `GET /api/monitor/teams`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    /// Username to look up.
    pub user: Option<String>,
}

/// Body of `POST /api/monitor/teams`, sent by the reporting client.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    /// Whether the user is currently in a meeting.
    pub meeting_status: bool,
    /// Reporting username.
    pub user: String,
    /// Icon URL to display for this user.
    pub user_icon_url: String,
}

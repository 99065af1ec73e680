//! Presence tracking configuration.

use serde::{Deserialize, Serialize};

/// Presence state machine and display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// Seconds without an update before an in-progress meeting is
    /// considered abandoned and force-closed.
    #[serde(default = "default_stale_timeout")]
    pub stale_timeout_seconds: i64,
    /// Icon URL used for users that have never reported.
    #[serde(default = "default_icon_url")]
    pub default_icon_url: String,
    /// URL of the client-side automation, echoed in status responses.
    #[serde(default = "default_shortcut_url")]
    pub shortcut_url: String,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            stale_timeout_seconds: default_stale_timeout(),
            default_icon_url: default_icon_url(),
            shortcut_url: default_shortcut_url(),
        }
    }
}

fn default_stale_timeout() -> i64 {
    600
}

fn default_icon_url() -> String {
    "https://cdn.iconscout.com/icon/free/png-256/avatar-370-456322.png".to_string()
}

fn default_shortcut_url() -> String {
    "https://www.icloud.com/shortcuts/fe4504fce4464b3b83cfc1c52882cb4f".to_string()
}

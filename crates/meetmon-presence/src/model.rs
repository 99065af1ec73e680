//! Presence record value object.

use serde::{Deserialize, Serialize};

/// The complete meeting-presence state for one user.
///
/// Field names follow the persisted JSON layout, so records written by
/// earlier deployments decode unchanged.
///
/// Invariant: `in_meeting == true` exactly when `meeting_start_time != 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRecord {
    /// Stable identifier, also the record's key.
    pub username: String,
    /// Display hint, opaque to the state machine.
    #[serde(rename = "user_icon_url")]
    pub icon_url: String,
    /// Whether the user is currently in a meeting.
    pub in_meeting: bool,
    /// Epoch seconds when the current meeting began; 0 when not in one.
    pub meeting_start_time: i64,
    /// Epoch seconds of the most recent event applied to this record.
    pub last_sync_time: i64,
    /// Accumulated meeting seconds; grows only when a session closes.
    pub total_meeting_time: i64,
}

impl PresenceRecord {
    /// Create a fresh record for a user that has never been seen:
    /// not in a meeting, timing fields unset.
    pub fn new(username: &str, icon_url: &str) -> Self {
        Self {
            username: username.to_string(),
            icon_url: icon_url.to_string(),
            in_meeting: false,
            meeting_start_time: 0,
            last_sync_time: 0,
            total_meeting_time: 0,
        }
    }

    /// Seconds elapsed in the current meeting as of `now`, 0 when idle.
    pub fn elapsed(&self, now: i64) -> i64 {
        if self.in_meeting {
            now - self.meeting_start_time
        } else {
            0
        }
    }
}

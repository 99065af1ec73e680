//! Store key builders for all MeetMon persisted entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses. Keys are logical names;
//! the Redis provider applies the configured global prefix.

/// Store key for the JSON-encoded list of known usernames.
pub fn users_index() -> String {
    "users".to_string()
}

/// Store key for one user's JSON-encoded presence record.
pub fn user_status(username: &str) -> String {
    format!("status:{username}")
}

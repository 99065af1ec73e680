//! Prometheus metrics emitted by the presence core.
//!
//! Exposed for scraping through the `/metrics` endpoint in the API
//! crate; this module only records.

use metrics::{counter, describe_counter, describe_gauge, gauge};

/// Gauge: 0 when the user is not in a meeting, current elapsed seconds
/// while one is in progress.
pub const MEETING_STATUS: &str = "meetmon_meeting_status";

/// Counter: sampler ticks observed while the user was in a meeting.
pub const MEETING_TIME_TOTAL: &str = "meetmon_meeting_time_total";

/// Register metric descriptions with the installed recorder.
pub fn describe() {
    describe_gauge!(
        MEETING_STATUS,
        "Elapsed seconds of the meeting in progress, 0 when not in one"
    );
    describe_counter!(
        MEETING_TIME_TOTAL,
        "Total sampled seconds spent in meetings"
    );
}

/// Initialize both series for a user seen for the first time, so the
/// scrape surface shows the user before any meeting happens.
pub fn record_user_seen(username: &str) {
    gauge!(MEETING_STATUS, "user" => username.to_string()).set(0.0);
    counter!(MEETING_TIME_TOTAL, "user" => username.to_string()).increment(0);
}

/// Reset the status gauge when a meeting session closes, whatever the
/// reason (explicit stop or staleness expiry).
pub fn record_status_reset(username: &str) {
    gauge!(MEETING_STATUS, "user" => username.to_string()).set(0.0);
}

/// Publish one live sample for an in-progress meeting.
pub fn record_meeting_sample(username: &str, elapsed_seconds: i64) {
    gauge!(MEETING_STATUS, "user" => username.to_string()).set(elapsed_seconds as f64);
    counter!(MEETING_TIME_TOTAL, "user" => username.to_string()).increment(1);
}

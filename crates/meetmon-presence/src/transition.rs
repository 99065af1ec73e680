//! Pure presence state transitions.
//!
//! Every path that ends a meeting session — an explicit stop event or a
//! staleness expiry — routes through [`apply_stop`], so accumulation of
//! `total_meeting_time` happens in exactly one place.

use crate::model::PresenceRecord;

/// Apply a "meeting started" event.
///
/// Re-asserting an already-running meeting leaves the timing fields
/// untouched; the icon and last-sync timestamp are refreshed on every
/// event regardless of prior state.
pub fn apply_start(mut record: PresenceRecord, now: i64, icon_url: &str) -> PresenceRecord {
    if !record.in_meeting {
        record.in_meeting = true;
        record.meeting_start_time = now;
    }
    record.icon_url = icon_url.to_string();
    record.last_sync_time = now;
    record
}

/// Apply a "meeting stopped" event. Returns the updated record and the
/// duration of the closed session in seconds.
///
/// A stop without a running meeting is tolerated: duration is 0 and only
/// the icon and last-sync timestamp change. A running meeting is closed
/// with `duration = now - meeting_start_time`, clamped to zero so that a
/// skewed clock can never shrink `total_meeting_time`.
pub fn apply_stop(mut record: PresenceRecord, now: i64, icon_url: &str) -> (PresenceRecord, i64) {
    let mut duration = 0;
    if record.in_meeting {
        duration = (now - record.meeting_start_time).max(0);
        record.total_meeting_time += duration;
        record.in_meeting = false;
        record.meeting_start_time = 0;
    }
    record.icon_url = icon_url.to_string();
    record.last_sync_time = now;
    (record, duration)
}

/// Force-close a meeting whose owner stopped reporting.
///
/// Returns `None` when the record is not in a meeting or its last update
/// is within the threshold. Otherwise the session is closed exactly as
/// by [`apply_stop`], timed at the moment it went stale
/// (`last_sync_time + threshold`) rather than at sweep time, so a late
/// sweep does not credit silence beyond the threshold.
pub fn expire_if_stale(
    record: PresenceRecord,
    now: i64,
    threshold: i64,
) -> Option<(PresenceRecord, i64)> {
    if !record.in_meeting || now - record.last_sync_time <= threshold {
        return None;
    }
    let deemed_end = record.last_sync_time + threshold;
    let icon_url = record.icon_url.clone();
    Some(apply_stop(record, deemed_end, &icon_url))
}

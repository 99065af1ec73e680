//! Persisted state layout and restart behavior.

use std::sync::Arc;

use http::StatusCode;
use serde_json::Value;

use meetmon_core::traits::store::StoreProvider;
use meetmon_presence::clock::ManualClock;
use meetmon_presence::{Clock, PresenceRepository, PresenceTracker};

use crate::helpers::{T0, TestApp};

#[tokio::test]
async fn test_persisted_layout_matches_wire_format() {
    let app = TestApp::new();
    app.post_status("alice", "https://example.com/u1.png", true)
        .await;

    let raw_index = app.store.get("users").await.unwrap().unwrap();
    let index: Value = serde_json::from_str(&raw_index).unwrap();
    assert_eq!(index["users"], serde_json::json!(["alice"]));

    let raw_record = app.store.get("status:alice").await.unwrap().unwrap();
    let record: Value = serde_json::from_str(&raw_record).unwrap();
    assert_eq!(record["username"], "alice");
    assert_eq!(record["user_icon_url"], "https://example.com/u1.png");
    assert_eq!(record["in_meeting"], true);
    assert_eq!(record["meeting_start_time"], T0);
    assert_eq!(record["last_sync_time"], T0);
    assert_eq!(record["total_meeting_time"], 0);
}

#[tokio::test]
async fn test_index_accumulates_users() {
    let app = TestApp::new();
    app.post_status("alice", "icon", true).await;
    app.post_status("bob", "icon", false).await;

    let raw_index = app.store.get("users").await.unwrap().unwrap();
    let index: Value = serde_json::from_str(&raw_index).unwrap();
    let mut users: Vec<String> = index["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    users.sort();
    assert_eq!(users, vec!["alice".to_string(), "bob".to_string()]);
}

#[tokio::test]
async fn test_restart_reloads_directory() {
    let app = TestApp::new();
    app.post_status("alice", "icon", true).await;

    // A second tracker over the same store simulates a process restart.
    let restarted = PresenceTracker::new(
        PresenceRepository::new(Arc::clone(&app.store)),
        Arc::new(ManualClock::new(T0 + 60)) as Arc<dyn Clock>,
        app.config.presence.default_icon_url.clone(),
    );

    assert_eq!(restarted.load_from_store().await, 1);
    let view = restarted.status("alice").await;
    assert!(view.in_meeting);
    assert_eq!(view.meeting_duration, "00:01:00");
}

#[tokio::test]
async fn test_stop_persists_accumulated_total() {
    let app = TestApp::new();

    let response = app.post_status("alice", "icon", true).await;
    assert_eq!(response.status, StatusCode::OK);
    app.clock.advance(120);
    app.post_status("alice", "icon", false).await;

    let raw_record = app.store.get("status:alice").await.unwrap().unwrap();
    let record: Value = serde_json::from_str(&raw_record).unwrap();
    assert_eq!(record["in_meeting"], false);
    assert_eq!(record["meeting_start_time"], 0);
    assert_eq!(record["total_meeting_time"], 120);
}

//! Monitor endpoint tests — status reporting and lookup.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_post_then_get_reports_meeting() {
    let app = TestApp::new();

    let response = app.post_status("alice", "https://example.com/u1.png", true).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["status"], "success");

    app.clock.advance(100);

    let response = app.get_status("alice").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["data"]["user"], "alice");
    assert_eq!(
        response.body["data"]["user_icon_url"],
        "https://example.com/u1.png"
    );
    assert_eq!(response.body["data"]["in_meeting"], true);
    assert_eq!(response.body["data"]["meeting_duration"], "00:01:40");
    assert_eq!(
        response.body["shortcut_url"],
        app.config.presence.shortcut_url
    );
}

#[tokio::test]
async fn test_duration_advances_with_wall_clock() {
    let app = TestApp::new();
    app.post_status("alice", "icon", true).await;

    app.clock.advance(30);
    let first = app.get_status("alice").await;
    assert_eq!(first.body["data"]["meeting_duration"], "00:00:30");

    app.clock.advance(3600);
    let second = app.get_status("alice").await;
    assert_eq!(second.body["data"]["meeting_duration"], "01:00:30");
}

#[tokio::test]
async fn test_unknown_user_returns_idle_defaults() {
    let app = TestApp::new();

    let response = app.get_status("bob").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"], "bob");
    assert_eq!(response.body["data"]["in_meeting"], false);
    assert_eq!(response.body["data"]["meeting_duration"], "00:00:00");
    assert_eq!(
        response.body["data"]["user_icon_url"],
        app.config.presence.default_icon_url
    );
}

#[tokio::test]
async fn test_missing_user_param_is_rejected() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/monitor/teams", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app.request("GET", "/api/monitor/teams?user=", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request_raw("POST", "/api/monitor/teams", "{not json".to_string())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    // Missing required fields is malformed too.
    let response = app
        .request(
            "POST",
            "/api/monitor/teams",
            Some(serde_json::json!({"user": "alice"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_user_in_body_is_rejected() {
    let app = TestApp::new();

    let response = app.post_status("", "icon", true).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_stop_resets_duration_and_accumulates() {
    let app = TestApp::new();

    app.post_status("alice", "icon", true).await;
    app.clock.advance(300);
    let response = app.post_status("alice", "icon", false).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.get_status("alice").await;
    assert_eq!(response.body["data"]["in_meeting"], false);
    assert_eq!(response.body["data"]["meeting_duration"], "00:00:00");
}

#[tokio::test]
async fn test_stale_meeting_closed_without_explicit_stop() {
    let app = TestApp::new();

    app.post_status("alice", "icon", true).await;
    app.clock.advance(601);

    let closed = app
        .tracker
        .expire_stale(app.config.presence.stale_timeout_seconds)
        .await;
    assert_eq!(closed, 1);

    let response = app.get_status("alice").await;
    assert_eq!(response.body["data"]["in_meeting"], false);
    assert_eq!(response.body["data"]["meeting_duration"], "00:00:00");
}

#[tokio::test]
async fn test_healthz_reports_store_status() {
    let app = TestApp::new();

    let response = app.request("GET", "/healthz", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "connected");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_presence_series() {
    let app = TestApp::new();
    app.post_status("alice", "icon", true).await;
    app.clock.advance(5);
    app.tracker.sample_metrics().await;

    let response = app.request("GET", "/metrics", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response.text.contains("meetmon_meeting_status"),
        "missing gauge in exposition: {}",
        response.text
    );
}

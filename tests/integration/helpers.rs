//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use meetmon_core::config::AppConfig;
use meetmon_presence::clock::ManualClock;
use meetmon_presence::{Clock, PresenceRepository, PresenceTracker};
use meetmon_store::StoreManager;
use meetmon_store::memory::MemoryStoreProvider;

/// Fixed start-of-test epoch second.
pub const T0: i64 = 1_700_000_000;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Presence tracker, for driving sweeps and clock-based assertions
    pub tracker: Arc<PresenceTracker>,
    /// Manually-advanced clock
    pub clock: Arc<ManualClock>,
    /// In-memory store backing the repository
    pub store: Arc<StoreManager>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.store.provider = "memory".to_string();

        // The recorder is process-global and shared across tests.
        meetmon_api::handlers::metrics::init_metrics();

        let store = Arc::new(StoreManager::from_provider(Arc::new(
            MemoryStoreProvider::new(),
        )));
        let clock = Arc::new(ManualClock::new(T0));
        let tracker = Arc::new(PresenceTracker::new(
            PresenceRepository::new(Arc::clone(&store)),
            Arc::clone(&clock) as Arc<dyn Clock>,
            config.presence.default_icon_url.clone(),
        ));

        let state = meetmon_api::state::AppState {
            config: Arc::new(config.clone()),
            tracker: Arc::clone(&tracker),
            store: Arc::clone(&store),
        };

        let router = meetmon_api::router::build_router(state);

        Self {
            router,
            tracker,
            clock,
            store,
            config,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body_str).await
    }

    /// Make an HTTP request with a raw (possibly invalid) body
    pub async fn request_raw(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }

    /// Report a meeting status update for a user
    pub async fn post_status(&self, user: &str, icon: &str, in_meeting: bool) -> TestResponse {
        self.request(
            "POST",
            "/api/monitor/teams",
            Some(serde_json::json!({
                "meeting_status": in_meeting,
                "user": user,
                "user_icon_url": icon,
            })),
        )
        .await
    }

    /// Fetch a user's presence
    pub async fn get_status(&self, user: &str) -> TestResponse {
        self.request("GET", &format!("/api/monitor/teams?user={user}"), None)
            .await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}

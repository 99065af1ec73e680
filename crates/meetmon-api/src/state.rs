//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use meetmon_core::config::AppConfig;
use meetmon_presence::PresenceTracker;
use meetmon_store::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Presence tracker (cache + repository + clock).
    pub tracker: Arc<PresenceTracker>,
    /// Persistent store, used by the health probe.
    pub store: Arc<StoreManager>,
}

//! Route definitions for the MeetMon HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::get,
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(monitor_routes())
        .merge(ops_routes())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Meeting monitor endpoints
fn monitor_routes() -> Router<AppState> {
    Router::new().route(
        "/api/monitor/teams",
        get(handlers::monitor::get_status).post(handlers::monitor::update_status),
    )
}

/// Health probe and metrics scrape endpoints (exempt from request logging)
fn ops_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::metrics_handler))
}

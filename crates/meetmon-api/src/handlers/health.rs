//! Health check handler.

use axum::Json;
use axum::extract::State;

use meetmon_core::traits::store::StoreProvider;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /healthz
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_reachable = state.store.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: if store_reachable {
            "connected".to_string()
        } else {
            "unreachable".to_string()
        },
    })
}

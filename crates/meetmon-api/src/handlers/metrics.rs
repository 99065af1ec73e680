//! Prometheus exposition endpoint.
//!
//! The recorder is process-global; [`init_metrics`] is idempotent so
//! the server and tests can both call it.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// Global Prometheus handle.
static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder and register metric descriptions.
pub fn init_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("Failed to install Prometheus recorder");

        meetmon_presence::metrics::describe();

        tracing::info!("Metrics recorder installed");
        handle
    })
}

/// GET /metrics
pub async fn metrics_handler() -> String {
    init_metrics().render()
}

//! MeetMon Server — per-user meeting presence monitor.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use meetmon_core::config::AppConfig;
use meetmon_core::error::AppError;
use meetmon_presence::{Clock, PresenceRepository, PresenceTracker, SystemClock};
use meetmon_store::StoreManager;
use meetmon_worker::{MetricsSampler, StaleSweeper};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("MEETMON_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting MeetMon v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Initialize store ─────────────────────────────────
    tracing::info!(
        "Initializing store (provider: {})...",
        config.store.provider
    );
    let store = Arc::new(StoreManager::new(&config.store).await?);
    tracing::info!("Store initialized");

    // ── Step 2: Install metrics recorder ─────────────────────────
    meetmon_api::handlers::metrics::init_metrics();

    // ── Step 3: Build tracker and load persisted directory ───────
    let repository = PresenceRepository::new(Arc::clone(&store));
    let tracker = Arc::new(PresenceTracker::new(
        repository,
        Arc::new(SystemClock) as Arc<dyn Clock>,
        config.presence.default_icon_url.clone(),
    ));

    let loaded = tracker.load_from_store().await;
    tracing::info!(users = loaded, "Presence directory loaded");

    // ── Step 4: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // ── Step 5: Start background reconciler ──────────────────────
    let mut worker_handles = Vec::new();
    if config.worker.enabled {
        tracing::info!("Starting background reconciler...");

        let sampler = MetricsSampler::new(
            Arc::clone(&tracker),
            Duration::from_secs(config.worker.sample_interval_seconds),
        );
        let sampler_cancel = shutdown_rx.clone();
        worker_handles.push(tokio::spawn(async move {
            sampler.run(sampler_cancel).await;
        }));

        let sweeper = StaleSweeper::new(
            Arc::clone(&tracker),
            config.presence.stale_timeout_seconds,
            Duration::from_secs(config.worker.sweep_interval_seconds),
        );
        let sweeper_cancel = shutdown_rx.clone();
        worker_handles.push(tokio::spawn(async move {
            sweeper.run(sweeper_cancel).await;
        }));

        tracing::info!("Background reconciler started");
    } else {
        tracing::info!("Background reconciler disabled");
    }

    // ── Step 6: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let app_state = meetmon_api::state::AppState {
        config: Arc::new(config.clone()),
        tracker: Arc::clone(&tracker),
        store: Arc::clone(&store),
    };

    let app = meetmon_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("MeetMon server listening on {}", addr);

    // ── Step 7: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 8: Wait for background tasks ────────────────────────
    tracing::info!("Waiting for background tasks to complete...");

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    for handle in worker_handles {
        let _ = tokio::time::timeout(grace, handle).await;
    }

    tracing::info!("MeetMon server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

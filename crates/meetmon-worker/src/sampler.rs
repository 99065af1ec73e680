//! Metrics sampler — publishes live gauges for in-progress meetings.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing;

use meetmon_presence::PresenceTracker;

/// Periodic loop that samples every in-meeting user into the status
/// gauge and tick counter. Never mutates presence state.
#[derive(Debug)]
pub struct MetricsSampler {
    /// Shared presence tracker.
    tracker: Arc<PresenceTracker>,
    /// Sampling interval.
    interval: Duration,
}

impl MetricsSampler {
    /// Create a new sampler.
    pub fn new(tracker: Arc<PresenceTracker>, interval: Duration) -> Self {
        Self { tracker, interval }
    }

    /// Run the sampler until the cancel signal is received.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            interval_seconds = self.interval.as_secs(),
            "Metrics sampler started"
        );

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!("Metrics sampler received shutdown signal");
                        break;
                    }
                }
                _ = time::sleep(self.interval) => {
                    let sampled = self.tracker.sample_metrics().await;
                    if sampled > 0 {
                        tracing::trace!(users = sampled, "Published meeting samples");
                    }
                }
            }
        }

        tracing::info!("Metrics sampler shut down");
    }
}

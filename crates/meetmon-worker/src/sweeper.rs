//! Staleness sweeper — detects and force-closes abandoned meetings.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing;

use meetmon_presence::PresenceTracker;

/// Periodic loop that closes meetings whose last update is older than
/// the staleness threshold. This is the only background path that
/// mutates presence state; the mutation stays in the cache until the
/// user's next persisted update.
#[derive(Debug)]
pub struct StaleSweeper {
    /// Shared presence tracker.
    tracker: Arc<PresenceTracker>,
    /// Staleness threshold in seconds.
    threshold_seconds: i64,
    /// Sweep interval.
    interval: Duration,
}

impl StaleSweeper {
    /// Create a new sweeper.
    pub fn new(tracker: Arc<PresenceTracker>, threshold_seconds: i64, interval: Duration) -> Self {
        Self {
            tracker,
            threshold_seconds,
            interval,
        }
    }

    /// Run the sweeper until the cancel signal is received.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            threshold_seconds = self.threshold_seconds,
            interval_seconds = self.interval.as_secs(),
            "Staleness sweeper started"
        );

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!("Staleness sweeper received shutdown signal");
                        break;
                    }
                }
                _ = time::sleep(self.interval) => {
                    let closed = self.tracker.expire_stale(self.threshold_seconds).await;
                    if closed > 0 {
                        tracing::info!(closed, "Staleness sweep force-closed meetings");
                    }
                }
            }
        }

        tracing::info!("Staleness sweeper shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetmon_presence::clock::ManualClock;
    use meetmon_presence::{Clock, PresenceRepository};
    use meetmon_store::StoreManager;
    use meetmon_store::memory::MemoryStoreProvider;

    fn make_tracker(clock: Arc<ManualClock>) -> Arc<PresenceTracker> {
        let store = Arc::new(StoreManager::from_provider(Arc::new(
            MemoryStoreProvider::new(),
        )));
        Arc::new(PresenceTracker::new(
            PresenceRepository::new(store),
            clock as Arc<dyn Clock>,
            "icon".to_string(),
        ))
    }

    #[tokio::test]
    async fn test_sweep_closes_stale_meeting_while_running() {
        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let tracker = make_tracker(Arc::clone(&clock));
        tracker.apply_update("alice", "icon", true).await.unwrap();
        clock.advance(601);

        let sweeper = StaleSweeper::new(Arc::clone(&tracker), 600, Duration::from_millis(10));
        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(async move { sweeper.run(rx).await });

        // Give the loop a few ticks to observe the stale record.
        time::sleep(Duration::from_millis(100)).await;
        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper did not stop on cancel")
            .unwrap();

        assert!(!tracker.status("alice").await.in_meeting);
    }
}

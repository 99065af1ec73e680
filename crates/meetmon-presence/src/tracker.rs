//! Presence tracker — the service facade over cache, repository, state
//! machine, and metrics.
//!
//! Constructed once at startup and shared by the HTTP handlers and the
//! background loops; there is no process-global state.

use std::sync::Arc;

use tracing::{info, warn};

use meetmon_core::result::AppResult;

use crate::cache::PresenceCache;
use crate::clock::Clock;
use crate::duration::format_duration;
use crate::metrics;
use crate::model::PresenceRecord;
use crate::repository::PresenceRepository;
use crate::transition;

/// A user's presence as reported to display clients.
#[derive(Debug, Clone)]
pub struct PresenceView {
    /// The queried username.
    pub username: String,
    /// Current icon URL (the default for unknown users).
    pub icon_url: String,
    /// Whether the user is currently in a meeting.
    pub in_meeting: bool,
    /// Elapsed meeting time as `HH:MM:SS`, `00:00:00` when idle.
    pub meeting_duration: String,
}

/// Tracks per-user meeting presence.
#[derive(Debug)]
pub struct PresenceTracker {
    /// Authoritative in-memory directory.
    cache: PresenceCache,
    /// Durable mirror of the directory.
    repository: PresenceRepository,
    /// Time source for every transition.
    clock: Arc<dyn Clock>,
    /// Icon used for users that have never reported.
    default_icon_url: String,
}

impl PresenceTracker {
    /// Create a tracker with an empty directory.
    pub fn new(
        repository: PresenceRepository,
        clock: Arc<dyn Clock>,
        default_icon_url: String,
    ) -> Self {
        Self {
            cache: PresenceCache::new(),
            repository,
            clock,
            default_icon_url,
        }
    }

    /// Populate the cache from the persistent store.
    ///
    /// A failed load is logged and leaves the directory empty rather
    /// than failing startup; the service stays available and the store
    /// is rewritten on the next update. Returns the number of records
    /// loaded.
    pub async fn load_from_store(&self) -> usize {
        match self.repository.load_all().await {
            Ok(directory) => {
                let count = directory.len();
                self.cache.replace_all(directory).await;
                count
            }
            Err(e) => {
                warn!(error = %e, "Failed to load presence directory, starting empty");
                0
            }
        }
    }

    /// Current presence of one user. Unknown users get an idle default
    /// view and are not added to the directory.
    pub async fn status(&self, username: &str) -> PresenceView {
        let now = self.clock.now();
        match self.cache.get(username).await {
            Some(record) => PresenceView {
                username: record.username.clone(),
                icon_url: record.icon_url.clone(),
                in_meeting: record.in_meeting,
                meeting_duration: format_duration(record.elapsed(now)),
            },
            None => PresenceView {
                username: username.to_string(),
                icon_url: self.default_icon_url.clone(),
                in_meeting: false,
                meeting_duration: format_duration(0),
            },
        }
    }

    /// Apply an explicit update event and persist the result.
    ///
    /// The cache is written before persistence; if the store write
    /// fails, the in-memory record keeps the update and the caller
    /// surfaces the error.
    pub async fn apply_update(
        &self,
        username: &str,
        icon_url: &str,
        in_meeting: bool,
    ) -> AppResult<PresenceRecord> {
        let now = self.clock.now();

        let record = match self.cache.get(username).await {
            Some(record) => record,
            None => {
                metrics::record_user_seen(username);
                PresenceRecord::new(username, &self.default_icon_url)
            }
        };

        let record = if in_meeting {
            transition::apply_start(record, now, icon_url)
        } else {
            let (record, duration) = transition::apply_stop(record, now, icon_url);
            info!(
                user = %username,
                duration = %format_duration(duration),
                "Meeting closed"
            );
            metrics::record_status_reset(username);
            record
        };

        self.cache.put(record.clone()).await;

        info!(user = %username, "Persisting presence update");
        let usernames = self.cache.usernames().await;
        self.repository.save_index(&usernames).await?;
        self.repository.save_record(&record).await?;

        Ok(record)
    }

    /// Publish one live gauge sample per in-meeting user. Mutates
    /// nothing; returns the number of users sampled.
    pub async fn sample_metrics(&self) -> usize {
        let now = self.clock.now();
        let mut sampled = 0;
        for record in self.cache.snapshot().await {
            if record.in_meeting {
                metrics::record_meeting_sample(&record.username, record.elapsed(now));
                sampled += 1;
            }
        }
        sampled
    }

    /// Force-close meetings whose last update is older than `threshold`
    /// seconds.
    ///
    /// Writes only the cache; the closure reaches the store on the
    /// user's next update. Returns the number of sessions closed.
    pub async fn expire_stale(&self, threshold: i64) -> usize {
        let now = self.clock.now();
        let mut closed = 0;
        for record in self.cache.snapshot().await {
            if let Some((record, duration)) = transition::expire_if_stale(record, now, threshold) {
                info!(
                    user = %record.username,
                    duration = %format_duration(duration),
                    "Stale meeting force-closed"
                );
                metrics::record_status_reset(&record.username);
                self.cache.put(record).await;
                closed += 1;
            }
        }
        closed
    }

    /// The repository backing this tracker.
    pub fn repository(&self) -> &PresenceRepository {
        &self.repository
    }
}

//! Authoritative in-memory presence directory.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::model::PresenceRecord;

/// In-memory mapping from username to presence record.
///
/// This is the single authoritative in-process view; request handlers
/// and the background loops all read and write through it. The whole
/// map sits behind one `RwLock`, which is sufficient here: entries are
/// small, writers are rare, and last-writer-wins is acceptable for
/// concurrent logical updates to the same user.
#[derive(Debug, Default)]
pub struct PresenceCache {
    /// The guarded directory.
    records: RwLock<HashMap<String, PresenceRecord>>,
}

impl PresenceCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Get a copy of one user's record, if known.
    pub async fn get(&self, username: &str) -> Option<PresenceRecord> {
        self.records.read().await.get(username).cloned()
    }

    /// Insert or replace one user's record.
    pub async fn put(&self, record: PresenceRecord) {
        self.records
            .write()
            .await
            .insert(record.username.clone(), record);
    }

    /// Copy of every record, for background sweeps.
    pub async fn snapshot(&self) -> Vec<PresenceRecord> {
        self.records.read().await.values().cloned().collect()
    }

    /// Every known username.
    pub async fn usernames(&self) -> Vec<String> {
        self.records.read().await.keys().cloned().collect()
    }

    /// Number of known users.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether no user has been seen yet.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Replace the whole directory, used by the startup load.
    pub async fn replace_all(&self, directory: HashMap<String, PresenceRecord>) {
        *self.records.write().await = directory;
    }
}

//! Durable mirror of the presence directory.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use meetmon_core::error::AppError;
use meetmon_core::result::AppResult;
use meetmon_core::traits::store::StoreProvider;
use meetmon_store::{StoreManager, keys};

use crate::model::PresenceRecord;

/// Persisted shape of the username index.
#[derive(Debug, Serialize, Deserialize)]
struct UserIndex {
    /// Known usernames.
    users: Vec<String>,
}

/// Serializes presence records to and from the persistent store.
///
/// The store holds one key with the JSON username index and one key per
/// user with that user's JSON record; the index allows enumeration
/// without scanning the backing keyspace.
#[derive(Debug, Clone)]
pub struct PresenceRepository {
    /// The configured store backend.
    store: Arc<StoreManager>,
}

impl PresenceRepository {
    /// Create a repository over the given store.
    pub fn new(store: Arc<StoreManager>) -> Self {
        Self { store }
    }

    /// Load the full directory: the username index, then each record.
    ///
    /// A missing index means nothing was ever persisted and yields an
    /// empty directory. Any other failure — an unreadable key, a record
    /// listed in the index but absent, a decode error — aborts the whole
    /// load; no partial directory is returned.
    pub async fn load_all(&self) -> AppResult<HashMap<String, PresenceRecord>> {
        let Some(raw_index) = self.store.get(&keys::users_index()).await? else {
            debug!("No persisted username index, starting empty");
            return Ok(HashMap::new());
        };
        let index: UserIndex = serde_json::from_str(&raw_index)?;

        let mut directory = HashMap::with_capacity(index.users.len());
        for username in index.users {
            let raw = self
                .store
                .get(&keys::user_status(&username))
                .await?
                .ok_or_else(|| {
                    error!(user = %username, "Indexed user has no persisted record");
                    AppError::not_found(format!("Missing presence record for '{username}'"))
                })?;
            let record: PresenceRecord = serde_json::from_str(&raw)?;
            directory.insert(username, record);
        }

        debug!(users = directory.len(), "Loaded presence directory");
        Ok(directory)
    }

    /// Overwrite the persisted username index with the given set.
    pub async fn save_index(&self, usernames: &[String]) -> AppResult<()> {
        let index = UserIndex {
            users: usernames.to_vec(),
        };
        let json = serde_json::to_string(&index)?;
        self.store.set(&keys::users_index(), &json).await
    }

    /// Overwrite one user's persisted record.
    pub async fn save_record(&self, record: &PresenceRecord) -> AppResult<()> {
        let json = serde_json::to_string(record)?;
        self.store
            .set(&keys::user_status(&record.username), &json)
            .await
    }
}

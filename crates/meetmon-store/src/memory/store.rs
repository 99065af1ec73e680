//! In-memory store implementation backed by a concurrent map.
//!
//! Entries never expire; this mirrors the durable-store semantics of
//! the Redis backend closely enough for development and tests, minus
//! persistence across restarts.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use meetmon_core::result::AppResult;
use meetmon_core::traits::store::StoreProvider;

/// In-memory store provider.
#[derive(Debug, Clone, Default)]
pub struct MemoryStoreProvider {
    /// The underlying key-value map.
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStoreProvider {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl StoreProvider for MemoryStoreProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

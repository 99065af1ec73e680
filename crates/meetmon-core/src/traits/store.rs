//! Persistent store trait for pluggable key-value backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for durable string-keyed stores (Redis or in-memory).
///
/// All values are opaque strings (JSON at the call sites). Entries are
/// written without expiry; the store is a durable mirror, not a cache.
#[async_trait]
pub trait StoreProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value. Overwrites any existing value.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a key from the store.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a key exists in the store.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Check that the store backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

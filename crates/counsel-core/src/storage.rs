//! Key-value persistence substrate consumed by the stores.

use async_trait::async_trait;

use crate::error::Result;

/// Storage key holding the serialized favorites array.
pub const FAVORITES_KEY: &str = "favorites";

/// Storage key holding the serialized search-history array.
pub const SEARCH_HISTORY_KEY: &str = "search_history";

/// Asynchronous string key-value storage.
///
/// Values are serialized JSON documents. Implementations serialize their
/// own operations per key; callers do not need to lock around a single
/// read-modify-write of one key.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;
}

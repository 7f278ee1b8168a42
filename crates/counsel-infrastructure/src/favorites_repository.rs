//! Favorites repository over a key-value storage substrate.
//!
//! The whole collection is stored as one JSON array under
//! [`FAVORITES_KEY`]. Failures are logged and collapsed into safe defaults.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use counsel_core::counselor::CounselorRecord;
use counsel_core::error::{CounselError, Result};
use counsel_core::favorites::{FavoriteEntry, FavoritesRepository};
use counsel_core::storage::{FAVORITES_KEY, KeyValueStorage};

pub struct StorageFavoritesRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl StorageFavoritesRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Reads the stored collection.
    ///
    /// Entries that no longer decode (for example records saved without an
    /// id) are skipped with a warning; a document that is not an array is
    /// an error.
    async fn load(&self) -> Result<Vec<FavoriteEntry>> {
        let Some(raw) = self.storage.get(FAVORITES_KEY).await? else {
            return Ok(Vec::new());
        };

        let value: Value = serde_json::from_str(&raw)?;
        let Value::Array(items) = value else {
            return Err(CounselError::Serialization {
                format: "JSON".to_string(),
                message: "favorites document is not an array".to_string(),
            });
        };

        Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<FavoriteEntry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable favorite entry: {}", e);
                    None
                }
            })
            .collect())
    }

    /// Like [`Self::load`], but a read failure yields an empty collection so
    /// the next write replaces unreadable data.
    async fn load_or_empty(&self) -> Vec<FavoriteEntry> {
        self.load().await.unwrap_or_else(|e| {
            tracing::warn!("Failed to read favorites, treating as empty: {}", e);
            Vec::new()
        })
    }

    async fn save(&self, entries: &[FavoriteEntry]) -> Result<()> {
        let serialized = serde_json::to_string(entries)?;
        self.storage.set(FAVORITES_KEY, &serialized).await
    }
}

#[async_trait]
impl FavoritesRepository for StorageFavoritesRepository {
    async fn get_favorites(&self) -> Vec<FavoriteEntry> {
        self.load_or_empty().await
    }

    async fn is_favorite(&self, key: &str) -> bool {
        match self.load().await {
            Ok(entries) => entries.iter().any(|e| e.key() == key),
            Err(e) => {
                tracing::warn!("Failed to check favorite '{}': {}", key, e);
                false
            }
        }
    }

    async fn toggle_favorite(&self, counselor: &CounselorRecord) -> bool {
        let mut entries = self.load_or_empty().await;
        let key = counselor.key();

        let was_favorite = entries.iter().any(|e| e.key() == key);
        if was_favorite {
            entries.retain(|e| e.key() != key);
        } else {
            entries.push(FavoriteEntry::snapshot(counselor));
        }

        match self.save(&entries).await {
            Ok(()) => {
                tracing::debug!("Favorite '{}' toggled to {}", key, !was_favorite);
                !was_favorite
            }
            Err(e) => {
                tracing::warn!("Failed to save favorites after toggling '{}': {}", key, e);
                was_favorite
            }
        }
    }

    async fn remove_from_favorites(&self, key: &str) -> bool {
        let mut entries = match self.load().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to read favorites before removing '{}': {}", key, e);
                return false;
            }
        };

        let before = entries.len();
        entries.retain(|e| e.key() != key);
        if entries.len() == before {
            return true;
        }

        match self.save(&entries).await {
            Ok(()) => {
                tracing::debug!("Favorite '{}' removed", key);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to save favorites after removing '{}': {}", key, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use counsel_core::counselor::get_all_counselors;

    /// Storage whose writes always fail.
    struct ReadOnlyStorage(MemoryStorage);

    #[async_trait]
    impl KeyValueStorage for ReadOnlyStorage {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key).await
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(CounselError::storage("read-only"))
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Err(CounselError::storage("read-only"))
        }
    }

    fn repo() -> StorageFavoritesRepository {
        StorageFavoritesRepository::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_toggle_twice_round_trips() {
        let repo = repo();
        let counselor = get_all_counselors().remove(0);

        assert!(repo.toggle_favorite(&counselor).await);
        assert!(repo.is_favorite(counselor.key()).await);

        assert!(!repo.toggle_favorite(&counselor).await);
        assert!(!repo.is_favorite(counselor.key()).await);
    }

    #[tokio::test]
    async fn test_stored_entry_is_a_snapshot() {
        let repo = repo();
        let mut counselor = get_all_counselors().remove(1);
        repo.toggle_favorite(&counselor).await;

        counselor.rating = 1.0;
        counselor.name = "Renamed".to_string();

        let favorites = repo.get_favorites().await;
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].counselor.name, "Lisa Taylor");
        assert_eq!(favorites[0].counselor.rating, 4.8);
    }

    #[tokio::test]
    async fn test_remove_from_favorites() {
        let repo = repo();
        let counselors = get_all_counselors();
        repo.toggle_favorite(&counselors[0]).await;
        repo.toggle_favorite(&counselors[2]).await;

        assert!(repo.remove_from_favorites(counselors[0].key()).await);
        assert!(repo.remove_from_favorites("not-there").await);

        let keys: Vec<String> = repo
            .get_favorites()
            .await
            .iter()
            .map(|e| e.key().to_string())
            .collect();
        assert_eq!(keys, vec![counselors[2].id.clone()]);
    }

    #[tokio::test]
    async fn test_corrupt_document_reads_as_empty() {
        let storage = Arc::new(MemoryStorage::with_entries([(FAVORITES_KEY, "{oops")]));
        let repo = StorageFavoritesRepository::new(storage);

        assert!(repo.get_favorites().await.is_empty());
        assert!(!repo.is_favorite("counselor-1").await);
        assert!(!repo.remove_from_favorites("counselor-1").await);
    }

    #[tokio::test]
    async fn test_toggle_replaces_corrupt_document() {
        let storage = Arc::new(MemoryStorage::with_entries([(FAVORITES_KEY, "42")]));
        let repo = StorageFavoritesRepository::new(storage);
        let counselor = get_all_counselors().remove(0);

        assert!(repo.toggle_favorite(&counselor).await);
        assert_eq!(repo.get_favorites().await.len(), 1);
    }

    #[tokio::test]
    async fn test_entries_without_id_are_skipped() {
        let raw = r#"[{"name":"Legacy","tag":"Anxiety"},{"id":"c-9","name":"Kept","tag":"Sleep"}]"#;
        let storage = Arc::new(MemoryStorage::with_entries([(FAVORITES_KEY, raw)]));
        let repo = StorageFavoritesRepository::new(storage);

        let favorites = repo.get_favorites().await;
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].key(), "c-9");
    }

    #[tokio::test]
    async fn test_write_failure_keeps_previous_state() {
        let repo = StorageFavoritesRepository::new(Arc::new(ReadOnlyStorage(MemoryStorage::new())));
        let counselor = get_all_counselors().remove(0);

        assert!(!repo.toggle_favorite(&counselor).await);
        assert!(!repo.is_favorite(counselor.key()).await);
    }

    #[tokio::test]
    async fn test_remove_reports_write_failure() {
        let entry = FavoriteEntry::snapshot(&get_all_counselors()[0]);
        let raw = serde_json::to_string(&vec![entry]).unwrap();
        let storage = ReadOnlyStorage(MemoryStorage::with_entries([(FAVORITES_KEY, raw)]));
        let repo = StorageFavoritesRepository::new(Arc::new(storage));

        assert!(repo.is_favorite("counselor-1").await);
        assert!(!repo.remove_from_favorites("counselor-1").await);
    }
}

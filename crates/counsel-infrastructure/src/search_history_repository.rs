//! Search history repository over a key-value storage substrate.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use counsel_core::config::{DEFAULT_SEARCH_HISTORY_LIMIT, DataLayerConfig, HistoryMatching};
use counsel_core::error::{CounselError, Result};
use counsel_core::search_history::{SearchHistory, SearchHistoryRepository};
use counsel_core::storage::{KeyValueStorage, SEARCH_HISTORY_KEY};

/// Stores recent searches as a JSON array of strings under [`SEARCH_HISTORY_KEY`].
pub struct StorageSearchHistoryRepository {
    storage: Arc<dyn KeyValueStorage>,
    limit: usize,
    matching: HistoryMatching,
}

impl StorageSearchHistoryRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            limit: DEFAULT_SEARCH_HISTORY_LIMIT,
            matching: HistoryMatching::default(),
        }
    }

    pub fn from_config(storage: Arc<dyn KeyValueStorage>, config: &DataLayerConfig) -> Self {
        Self {
            storage,
            limit: config.search_history_limit,
            matching: config.history_matching,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    async fn load(&self) -> Result<SearchHistory> {
        let Some(raw) = self.storage.get(SEARCH_HISTORY_KEY).await? else {
            return Ok(SearchHistory::new());
        };

        let value: Value = serde_json::from_str(&raw)?;
        let Value::Array(items) = value else {
            return Err(CounselError::Serialization {
                format: "JSON".to_string(),
                message: "search history document is not an array".to_string(),
            });
        };

        // Non-string entries are ignored.
        let terms = items.into_iter().filter_map(|item| match item {
            Value::String(term) => Some(term),
            _ => None,
        });
        Ok(SearchHistory::from_stored(terms, self.limit, self.matching))
    }

    async fn load_or_empty(&self) -> SearchHistory {
        self.load().await.unwrap_or_else(|e| {
            tracing::warn!("Failed to read search history, treating as empty: {}", e);
            SearchHistory::new()
        })
    }
}

#[async_trait]
impl SearchHistoryRepository for StorageSearchHistoryRepository {
    async fn get_search_history(&self) -> Vec<String> {
        self.load_or_empty().await.into_terms()
    }

    async fn add_to_search_history(&self, term: &str) {
        let mut history = self.load_or_empty().await;
        if !history.record(term, self.limit, self.matching) {
            return;
        }

        let result = match serde_json::to_string(&history) {
            Ok(serialized) => self.storage.set(SEARCH_HISTORY_KEY, &serialized).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to save search history: {}", e);
        }
    }

    async fn clear_search_history(&self) {
        if let Err(e) = self.storage.remove(SEARCH_HISTORY_KEY).await {
            tracing::warn!("Failed to clear search history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn repo() -> StorageSearchHistoryRepository {
        StorageSearchHistoryRepository::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_dedup_moves_term_to_front() {
        let repo = repo();
        repo.add_to_search_history("anxiety").await;
        repo.add_to_search_history("stress").await;
        repo.add_to_search_history("anxiety").await;

        assert_eq!(repo.get_search_history().await, vec!["anxiety", "stress"]);
    }

    #[tokio::test]
    async fn test_bounded_to_limit() {
        let repo = repo();
        for i in 0..15 {
            repo.add_to_search_history(&format!("term {i}")).await;
        }

        let history = repo.get_search_history().await;
        assert_eq!(history.len(), DEFAULT_SEARCH_HISTORY_LIMIT);
        assert_eq!(history.first().map(String::as_str), Some("term 14"));
        assert_eq!(history.last().map(String::as_str), Some("term 5"));
    }

    #[tokio::test]
    async fn test_blank_terms_are_ignored() {
        let repo = repo();
        repo.add_to_search_history("   ").await;
        repo.add_to_search_history("").await;
        assert!(repo.get_search_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = repo();
        repo.add_to_search_history("sleep").await;
        repo.clear_search_history().await;
        assert!(repo.get_search_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_case_insensitive_config() {
        let config = DataLayerConfig {
            history_matching: HistoryMatching::CaseInsensitive,
            search_history_limit: 3,
            ..DataLayerConfig::default()
        };
        let repo =
            StorageSearchHistoryRepository::from_config(Arc::new(MemoryStorage::new()), &config);

        repo.add_to_search_history("Stress").await;
        repo.add_to_search_history("STRESS").await;
        assert_eq!(repo.get_search_history().await, vec!["STRESS"]);
        assert_eq!(repo.limit(), 3);
    }

    #[tokio::test]
    async fn test_corrupt_document_reads_as_empty_and_is_replaced() {
        let storage = Arc::new(MemoryStorage::with_entries([(SEARCH_HISTORY_KEY, "not json")]));
        let repo = StorageSearchHistoryRepository::new(storage);

        assert!(repo.get_search_history().await.is_empty());
        repo.add_to_search_history("career").await;
        assert_eq!(repo.get_search_history().await, vec!["career"]);
    }

    #[tokio::test]
    async fn test_non_string_entries_are_ignored() {
        let storage = Arc::new(MemoryStorage::with_entries([(
            SEARCH_HISTORY_KEY,
            r#"["sleep", 3, null, "family"]"#,
        )]));
        let repo = StorageSearchHistoryRepository::new(storage);

        assert_eq!(repo.get_search_history().await, vec!["sleep", "family"]);
    }

    #[tokio::test]
    async fn test_shrunk_limit_truncates_on_read() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let wide = StorageSearchHistoryRepository::new(Arc::clone(&storage));
        for term in ["a", "b", "c", "d"] {
            wide.add_to_search_history(term).await;
        }

        let narrow = StorageSearchHistoryRepository::new(storage).with_limit(2);
        assert_eq!(narrow.get_search_history().await, vec!["d", "c"]);
    }

    #[tokio::test]
    async fn test_stored_duplicates_are_collapsed_on_read() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::with_entries([(
            SEARCH_HISTORY_KEY,
            r#"["Stress", "stress", " stress ", "", "career"]"#,
        )]));

        let exact = StorageSearchHistoryRepository::new(Arc::clone(&storage));
        assert_eq!(exact.get_search_history().await, vec!["Stress", "stress", "career"]);

        let config = DataLayerConfig {
            history_matching: HistoryMatching::CaseInsensitive,
            ..DataLayerConfig::default()
        };
        let folded = StorageSearchHistoryRepository::from_config(storage, &config);
        assert_eq!(folded.get_search_history().await, vec!["Stress", "career"]);

        folded.add_to_search_history("career").await;
        assert_eq!(folded.get_search_history().await, vec!["career", "Stress"]);
    }
}

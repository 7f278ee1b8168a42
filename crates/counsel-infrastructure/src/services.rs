//! Wiring of the stores into a bundle handed to consumers.

use std::sync::Arc;

use counsel_core::config::DataLayerConfig;
use counsel_core::error::Result;
use counsel_core::favorites::FavoritesRepository;
use counsel_core::filter::SuggestionLimits;
use counsel_core::search_history::SearchHistoryRepository;
use counsel_core::storage::KeyValueStorage;

use crate::config_service::ConfigService;
use crate::favorites_repository::StorageFavoritesRepository;
use crate::paths::CounselPaths;
use crate::search_history_repository::StorageSearchHistoryRepository;
use crate::storage::{JsonFileStorage, MemoryStorage};

/// The data-layer services a view needs, constructed once and passed in.
#[derive(Clone)]
pub struct CounselServices {
    pub config: DataLayerConfig,
    pub favorites: Arc<dyn FavoritesRepository>,
    pub search_history: Arc<dyn SearchHistoryRepository>,
}

impl CounselServices {
    /// Builds both stores over a shared storage substrate.
    pub fn with_storage(storage: Arc<dyn KeyValueStorage>, config: DataLayerConfig) -> Self {
        let favorites = Arc::new(StorageFavoritesRepository::new(Arc::clone(&storage)));
        let search_history = Arc::new(StorageSearchHistoryRepository::from_config(
            storage, &config,
        ));

        Self {
            config,
            favorites,
            search_history,
        }
    }

    /// Loads config and opens file-backed storage at the resolved paths.
    pub async fn open(paths: &CounselPaths) -> Result<Self> {
        let config = ConfigService::new(paths.config_file()?).load().await?;
        Self::open_with_config(paths, config)
    }

    /// Opens file-backed storage with an already loaded config.
    pub fn open_with_config(paths: &CounselPaths, config: DataLayerConfig) -> Result<Self> {
        let store_dir = paths.store_dir()?;
        tracing::info!("Opening counsel store at {:?}", store_dir);

        Ok(Self::with_storage(
            Arc::new(JsonFileStorage::new(store_dir)),
            config,
        ))
    }

    /// Ephemeral services with default config.
    pub fn in_memory() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()), DataLayerConfig::default())
    }

    pub fn suggestion_limits(&self) -> SuggestionLimits {
        SuggestionLimits::from(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counsel_core::counselor::get_all_counselors;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_in_memory_services_share_nothing_across_instances() {
        let first = CounselServices::in_memory();
        let second = CounselServices::in_memory();
        let counselor = get_all_counselors().remove(0);

        first.favorites.toggle_favorite(&counselor).await;
        assert!(first.favorites.is_favorite(counselor.key()).await);
        assert!(!second.favorites.is_favorite(counselor.key()).await);
    }

    #[tokio::test]
    async fn test_open_reads_config_from_paths() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "search_history_limit = 2\nsuggestion_limit = 3\n",
        )
        .unwrap();

        let services = CounselServices::open(&CounselPaths::new(Some(temp_dir.path().to_path_buf())))
            .await
            .unwrap();
        assert_eq!(services.config.search_history_limit, 2);
        assert_eq!(services.suggestion_limits().max_results, 3);

        for term in ["a", "b", "c"] {
            services.search_history.add_to_search_history(term).await;
        }
        assert_eq!(services.search_history.get_search_history().await, vec!["c", "b"]);
    }
}

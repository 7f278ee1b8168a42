pub mod config_service;
pub mod favorites_repository;
pub mod paths;
pub mod search_history_repository;
pub mod services;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::favorites_repository::StorageFavoritesRepository;
pub use crate::paths::CounselPaths;
pub use crate::search_history_repository::StorageSearchHistoryRepository;
pub use crate::services::CounselServices;
pub use crate::storage::{JsonFileStorage, MemoryStorage};

//! Recent searches: bounded history model and repository trait.

mod model;
mod repository;

pub use model::SearchHistory;
pub use repository::SearchHistoryRepository;

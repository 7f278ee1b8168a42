//! Search history repository trait.

use async_trait::async_trait;

/// Persistent recent-search list.
///
/// Reads fall back to an empty list; writes are fire-and-forget and only
/// log on failure.
#[async_trait]
pub trait SearchHistoryRepository: Send + Sync {
    /// Returns stored terms, most recent first.
    async fn get_search_history(&self) -> Vec<String>;

    /// Records `term` as the most recent search. Blank terms are ignored.
    async fn add_to_search_history(&self, term: &str);

    async fn clear_search_history(&self);
}

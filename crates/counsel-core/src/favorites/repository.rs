//! Favorites repository trait.

use async_trait::async_trait;

use super::model::FavoriteEntry;
use crate::counselor::CounselorRecord;

/// Persistent set of favorited counselors keyed by counselor id.
///
/// Every method degrades to a safe default (empty list / `false`)
/// instead of returning an error, so callers render "no favorites" and
/// "read error" the same way.
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Returns all favorites in insertion order.
    async fn get_favorites(&self) -> Vec<FavoriteEntry>;

    /// Returns whether `key` is currently favorited.
    async fn is_favorite(&self, key: &str) -> bool;

    /// Adds a snapshot of `counselor` if absent, removes it if present.
    ///
    /// Returns the new state. Calling twice flips twice.
    async fn toggle_favorite(&self, counselor: &CounselorRecord) -> bool;

    /// Removes `key` from favorites. Returns whether the write succeeded.
    async fn remove_from_favorites(&self, key: &str) -> bool;
}

//! Favorite domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::counselor::CounselorRecord;

/// A persisted snapshot of a counselor taken when it was favorited.
///
/// The counselor fields are flattened so the stored document stays an
/// array of counselor-shaped objects. Entries are never edited in place;
/// removing and re-adding is the only way to refresh one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    #[serde(flatten)]
    pub counselor: CounselorRecord,
    /// When the entry was created. Absent in entries written before the
    /// timestamp was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorited_at: Option<DateTime<Utc>>,
}

impl FavoriteEntry {
    /// Snapshots `counselor` with the current time.
    pub fn snapshot(counselor: &CounselorRecord) -> Self {
        Self {
            counselor: counselor.clone(),
            favorited_at: Some(Utc::now()),
        }
    }

    pub fn key(&self) -> &str {
        self.counselor.key()
    }
}

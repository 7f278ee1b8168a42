//! Data-layer configuration.
//!
//! Loaded from `config.toml` by the infrastructure crate. Every field has a
//! default so a missing or partial file is valid.

use serde::{Deserialize, Serialize};

/// Default number of retained search-history terms.
pub const DEFAULT_SEARCH_HISTORY_LIMIT: usize = 10;

/// Default maximum number of suggestions returned for a partial query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 7;

/// Default minimum query length (in characters) before suggestions appear.
pub const DEFAULT_MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Default quiet period before a debounced search fires.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// How search-history terms are compared for deduplication.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMatching {
    /// Terms are equal only when byte-identical.
    #[default]
    Exact,
    /// Terms differing only in letter case are the same entry; the most
    /// recent spelling is kept.
    CaseInsensitive,
}

impl HistoryMatching {
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataLayerConfig {
    pub search_history_limit: usize,
    pub suggestion_limit: usize,
    pub min_suggestion_query_len: usize,
    pub search_debounce_ms: u64,
    pub history_matching: HistoryMatching,
    /// Default tracing filter directive (e.g. "info", "counsel=debug").
    pub log_level: String,
}

impl Default for DataLayerConfig {
    fn default() -> Self {
        Self {
            search_history_limit: DEFAULT_SEARCH_HISTORY_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            min_suggestion_query_len: DEFAULT_MIN_SUGGESTION_QUERY_LEN,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            history_matching: HistoryMatching::default(),
            log_level: "info".to_string(),
        }
    }
}

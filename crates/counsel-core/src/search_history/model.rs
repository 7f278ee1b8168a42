//! Search history domain model.

use serde::{Deserialize, Serialize};

use crate::config::HistoryMatching;

/// Bounded, deduplicated list of recent search terms, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SearchHistory {
    terms: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a history from previously stored terms.
    ///
    /// Terms are trimmed and blank ones dropped. Of several terms equal
    /// under `matching`, only the first (most recent) is kept. The result
    /// holds at most `limit` terms.
    pub fn from_stored<I>(terms: I, limit: usize, matching: HistoryMatching) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut kept: Vec<String> = Vec::new();
        for term in terms {
            if kept.len() >= limit {
                break;
            }
            let term = term.trim();
            if term.is_empty() || kept.iter().any(|existing| matching.matches(existing, term)) {
                continue;
            }
            kept.push(term.to_string());
        }
        Self { terms: kept }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }

    /// Records `term` as the most recent search.
    ///
    /// The term is trimmed; blank input is ignored and returns `false`.
    /// An existing matching entry is removed before the term is prepended,
    /// then the list is truncated to `limit`.
    pub fn record(&mut self, term: &str, limit: usize, matching: HistoryMatching) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }

        self.terms.retain(|existing| !matching.matches(existing, term));
        self.terms.insert(0, term.to_string());
        self.terms.truncate(limit);
        true
    }
}

//! Type-ahead suggestions for the search box.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MIN_SUGGESTION_QUERY_LEN, DEFAULT_SUGGESTION_LIMIT, DataLayerConfig};
use crate::counselor::CounselorRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SuggestionKind {
    Counselor,
    Specialty,
}

/// Payload attached to a suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SuggestionData {
    Counselor(CounselorRecord),
    Specialty { specialty: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub data: SuggestionData,
}

/// Bounds applied by [`generate_suggestions_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionLimits {
    pub max_results: usize,
    pub min_query_len: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_SUGGESTION_LIMIT,
            min_query_len: DEFAULT_MIN_SUGGESTION_QUERY_LEN,
        }
    }
}

impl From<&DataLayerConfig> for SuggestionLimits {
    fn from(config: &DataLayerConfig) -> Self {
        Self {
            max_results: config.suggestion_limit,
            min_query_len: config.min_suggestion_query_len,
        }
    }
}

/// Suggestions for `query` with the default limits (7 results, 2 characters).
pub fn generate_suggestions(
    query: &str,
    counselors: Option<&[CounselorRecord]>,
) -> Vec<Suggestion> {
    generate_suggestions_with(query, counselors, SuggestionLimits::default())
}

/// Suggestions for a partially typed query.
///
/// Counselor names come first, one per matching counselor, followed by
/// matching tags and specialties with each distinct label listed once.
/// The list is cut at `limits.max_results` in discovery order.
pub fn generate_suggestions_with(
    query: &str,
    counselors: Option<&[CounselorRecord]>,
    limits: SuggestionLimits,
) -> Vec<Suggestion> {
    let query = query.trim();
    let Some(counselors) = counselors else {
        return Vec::new();
    };
    if query.chars().count() < limits.min_query_len || limits.max_results == 0 {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut suggestions = Vec::new();

    for counselor in counselors {
        if counselor.name.to_lowercase().contains(&needle) {
            suggestions.push(Suggestion {
                text: counselor.name.clone(),
                kind: SuggestionKind::Counselor,
                data: SuggestionData::Counselor(counselor.clone()),
            });
            if suggestions.len() >= limits.max_results {
                return suggestions;
            }
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let labels = counselors
        .iter()
        .flat_map(|c| std::iter::once(&c.tag).chain(c.specialties.iter()));

    for label in labels {
        if label.is_empty() || seen.contains(label.as_str()) {
            continue;
        }
        if label.to_lowercase().contains(&needle) {
            seen.insert(label.as_str());
            suggestions.push(Suggestion {
                text: label.clone(),
                kind: SuggestionKind::Specialty,
                data: SuggestionData::Specialty {
                    specialty: label.clone(),
                },
            });
            if suggestions.len() >= limits.max_results {
                break;
            }
        }
    }

    suggestions
}

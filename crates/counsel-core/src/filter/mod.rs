//! Pure list filtering, ordering and suggestion ranking over counselor records.
//!
//! Nothing in this module performs I/O or keeps state between calls.

pub mod criteria;
pub mod engine;
pub mod suggestion;

pub use criteria::{FilterCriteria, PriceSort, SortBy};
pub use engine::search_counselors;
pub use suggestion::{
    Suggestion, SuggestionData, SuggestionKind, SuggestionLimits, generate_suggestions,
    generate_suggestions_with,
};

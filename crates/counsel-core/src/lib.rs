//! Domain layer for the Counsel client: counselor records, favorites and
//! search-history contracts, the key-value storage port, and the pure
//! filtering engine that list and search views call.

pub mod config;
pub mod counselor;
pub mod debounce;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod search_history;
pub mod storage;

// Re-export common error type
pub use error::CounselError;

pub use counselor::CounselorRecord;
pub use filter::{FilterCriteria, generate_suggestions, search_counselors};

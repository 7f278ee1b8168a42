//! Counselor profiles: the subject of search, filtering and favorites.

mod model;
pub mod sample;

pub use model::{CounselorRecord, MAX_RATING, normalize_counselors};
pub use sample::get_all_counselors;

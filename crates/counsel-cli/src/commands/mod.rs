pub mod favorites;
pub mod history;
pub mod live;
pub mod search;

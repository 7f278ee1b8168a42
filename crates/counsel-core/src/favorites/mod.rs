//! Favorite counselors: domain model and repository trait.

mod model;
mod repository;

pub use model::FavoriteEntry;
pub use repository::FavoritesRepository;

use anyhow::{Result, bail};
use clap::Subcommand;
use counsel_core::counselor::get_all_counselors;
use counsel_infrastructure::CounselServices;

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    /// List favorited counselors
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Favorite a counselor, or unfavorite it if already favorited
    Toggle { id: String },
    /// Remove a counselor from favorites
    Remove { id: String },
}

pub async fn run(services: &CounselServices, action: FavoritesAction) -> Result<()> {
    match action {
        FavoritesAction::List { json } => {
            let favorites = services.favorites.get_favorites().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&favorites)?);
                return Ok(());
            }
            if favorites.is_empty() {
                println!("No favorites yet.");
            }
            for entry in favorites {
                let saved = entry
                    .favorited_at
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                println!(
                    "{:<12} {:<16} {:<14} {}",
                    entry.counselor.id, entry.counselor.name, entry.counselor.tag, saved
                );
            }
        }
        FavoritesAction::Toggle { id } => {
            let Some(counselor) = get_all_counselors().into_iter().find(|c| c.id == id) else {
                bail!("Unknown counselor id: {}", id);
            };
            if services.favorites.toggle_favorite(&counselor).await {
                println!("Added {} to favorites.", counselor.name);
            } else {
                println!("{} is not in favorites.", counselor.name);
            }
        }
        FavoritesAction::Remove { id } => {
            if !services.favorites.remove_from_favorites(&id).await {
                bail!("Could not remove {} from favorites", id);
            }
            println!("Removed {} from favorites.", id);
        }
    }

    Ok(())
}

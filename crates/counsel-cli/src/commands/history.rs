use anyhow::Result;
use clap::Subcommand;
use counsel_infrastructure::CounselServices;

#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// Show recent searches, newest first
    List,
    /// Record a search term
    Add { term: String },
    /// Forget all recent searches
    Clear,
}

pub async fn run(services: &CounselServices, action: HistoryAction) -> Result<()> {
    match action {
        HistoryAction::List => {
            let history = services.search_history.get_search_history().await;
            if history.is_empty() {
                println!("No recent searches.");
            }
            for (i, term) in history.iter().enumerate() {
                println!("{:>2}. {}", i + 1, term);
            }
        }
        HistoryAction::Add { term } => {
            services.search_history.add_to_search_history(&term).await;
        }
        HistoryAction::Clear => {
            services.search_history.clear_search_history().await;
            println!("Search history cleared.");
        }
    }

    Ok(())
}

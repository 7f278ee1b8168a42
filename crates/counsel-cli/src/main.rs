use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use counsel_infrastructure::{ConfigService, CounselPaths, CounselServices};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::favorites::FavoritesAction;
use commands::history::HistoryAction;
use commands::search::SearchArgs;

#[derive(Parser)]
#[command(name = "counsel")]
#[command(about = "Counsel CLI - search counselors, manage favorites and recent searches", long_about = None)]
struct Cli {
    /// Directory holding config.toml and the store (defaults to platform dirs)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Explicit config directory (overrides --data-dir for config.toml)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the counselor list and record the query in history
    Search(SearchArgs),
    /// Show type-ahead suggestions for a partial query
    Suggest {
        query: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Read successive query states from stdin and search once input settles
    Live,
    /// Manage favorite counselors
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Manage recent searches
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

fn init_tracing(default_level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = CounselPaths::new(cli.data_dir);
    if let Some(config_dir) = cli.config_dir {
        paths = paths.with_config_dir(config_dir);
    }

    let config = ConfigService::new(paths.config_file()?)
        .load()
        .await
        .context("Failed to load config")?;
    init_tracing(&config.log_level, cli.verbose);

    let services = CounselServices::open_with_config(&paths, config)
        .context("Failed to open counsel data store")?;

    match cli.command {
        Commands::Search(args) => commands::search::run(&services, args).await?,
        Commands::Suggest { query, json } => commands::search::suggest(&services, &query, json)?,
        Commands::Live => commands::live::run(&services).await?,
        Commands::Favorites { action } => commands::favorites::run(&services, action).await?,
        Commands::History { action } => commands::history::run(&services, action).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_dir_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "counsel",
            "history",
            "list",
            "--data-dir",
            "/tmp/counsel",
            "--config-dir",
            "/etc/counsel",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/counsel")));
        assert_eq!(cli.config_dir, Some(PathBuf::from("/etc/counsel")));
        assert!(matches!(cli.command, Commands::History { .. }));
    }

    #[test]
    fn test_config_flag_is_not_accepted() {
        assert!(Cli::try_parse_from(["counsel", "--config", "x.toml", "live"]).is_err());
    }
}

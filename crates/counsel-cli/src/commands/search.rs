use std::collections::HashSet;

use anyhow::Result;
use clap::{Args, ValueEnum};
use counsel_core::counselor::{CounselorRecord, get_all_counselors};
use counsel_core::filter::{
    FilterCriteria, PriceSort, SortBy, SuggestionKind, generate_suggestions_with,
    search_counselors,
};
use counsel_infrastructure::CounselServices;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Relevance,
    Rating,
    Experience,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortBy::Relevance,
            SortArg::Rating => SortBy::Rating,
            SortArg::Experience => SortBy::Experience,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriceSortArg {
    LowToHigh,
    HighToLow,
}

impl From<PriceSortArg> for PriceSort {
    fn from(arg: PriceSortArg) -> Self {
        match arg {
            PriceSortArg::LowToHigh => PriceSort::LowToHigh,
            PriceSortArg::HighToLow => PriceSort::HighToLow,
        }
    }
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text matched against name, tag and specialties (empty lists everyone)
    #[arg(default_value = "")]
    pub query: String,

    /// Only counselors with this specialty
    #[arg(long)]
    pub specialty: Option<String>,

    /// Only counselors currently online
    #[arg(long)]
    pub online: bool,

    /// Minimum rating (1-5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub min_rating: Option<u8>,

    /// Maximum price in coins per minute
    #[arg(long)]
    pub max_price: Option<f64>,

    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    #[arg(long, value_enum)]
    pub price_sort: Option<PriceSortArg>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            price_sort: self.price_sort.map(Into::into),
            min_rating: self.min_rating,
            online_only: self.online.then_some(true),
            specialty: self.specialty.clone(),
            max_price: self.max_price,
            sort_by: self.sort.map(Into::into),
        }
    }
}

pub async fn run(services: &CounselServices, args: SearchArgs) -> Result<()> {
    let counselors = get_all_counselors();
    let criteria = args.criteria();

    let results = search_counselors(&args.query, Some(&counselors), Some(&criteria));
    services.search_history.add_to_search_history(&args.query).await;
    tracing::debug!(
        "Search '{}' with {} active filters returned {} results",
        args.query,
        criteria.active_filter_count(),
        results.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let favorite_keys: HashSet<String> = services
        .favorites
        .get_favorites()
        .await
        .into_iter()
        .map(|f| f.counselor.id)
        .collect();
    print_counselors(&results, &favorite_keys);
    Ok(())
}

pub fn suggest(services: &CounselServices, query: &str, json: bool) -> Result<()> {
    let counselors = get_all_counselors();
    let suggestions =
        generate_suggestions_with(query, Some(&counselors), services.suggestion_limits());

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No suggestions.");
    }
    for suggestion in suggestions {
        let label = match suggestion.kind {
            SuggestionKind::Counselor => "counselor",
            SuggestionKind::Specialty => "specialty",
        };
        println!("{:<10} {}", label, suggestion.text);
    }
    Ok(())
}

pub fn print_counselors(counselors: &[CounselorRecord], favorite_keys: &HashSet<String>) {
    if counselors.is_empty() {
        println!("No counselors found.");
        return;
    }

    for c in counselors {
        let star = if favorite_keys.contains(&c.id) { "*" } else { " " };
        let rating = if c.has_reviews() {
            format!("{:.1}", c.rating)
        } else {
            "new".to_string()
        };
        let status = if c.is_online { "online" } else { "offline" };
        println!(
            "{} {:<12} {:<16} {:<14} {:>4}  {:>3} coins/min  {}",
            star, c.id, c.name, c.tag, rating, c.rate, status
        );
    }
}

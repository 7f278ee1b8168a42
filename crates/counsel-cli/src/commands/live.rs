//! Type-ahead search over stdin.
//!
//! Each input line is the current content of the search box. Searches are
//! debounced, so a fast burst of lines (or a piped file) triggers a single
//! search for the last line.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use counsel_core::counselor::{CounselorRecord, get_all_counselors};
use counsel_core::debounce::debounce;
use counsel_core::filter::search_counselors;
use counsel_infrastructure::CounselServices;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::search::print_counselors;

pub async fn run(services: &CounselServices) -> Result<()> {
    let counselors: Arc<Vec<CounselorRecord>> = Arc::new(get_all_counselors());
    let wait = Duration::from_millis(services.config.search_debounce_ms);

    // Settled queries are forwarded here so history writes stay on this task.
    let (settled_tx, mut settled_rx) = mpsc::unbounded_channel::<String>();

    let list = Arc::clone(&counselors);
    let search = debounce(
        move |query: String| {
            let results = search_counselors(&query, Some(&list), None);
            println!("> {}", query.trim());
            print_counselors(&results, &HashSet::new());
            let _ = settled_tx.send(query);
        },
        wait,
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(query) => search.call(query),
                None => break,
            },
            Some(query) = settled_rx.recv() => {
                services.search_history.add_to_search_history(&query).await;
            }
        }
    }

    // Let the last pending search fire after EOF.
    if search.is_pending() {
        tokio::time::sleep(wait + Duration::from_millis(10)).await;
    }
    drop(search);

    while let Some(query) = settled_rx.recv().await {
        services.search_history.add_to_search_history(&query).await;
    }

    Ok(())
}

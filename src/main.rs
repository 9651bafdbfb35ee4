use std::sync::Arc;

use clap::Parser;
use search_trigger::config::CONFIG;
use search_trigger::{HttpTransport, MemoryPage, SearchTrigger};

/// Fire client searches against the search endpoint and print what the
/// results container ends up showing.
#[derive(Debug, Parser)]
#[command(name = "search-trigger", version)]
struct Args {
    /// Queries typed into the search box, one trigger each. Triggers overlap.
    #[arg(required = true)]
    queries: Vec<String>,

    /// Server origin [env: SEARCH_BASE_URL]
    #[arg(long)]
    base_url: Option<String>,

    /// Id of the search input element [env: SEARCH_INPUT_ID]
    #[arg(long)]
    input_id: Option<String>,

    /// Id of the results container [env: SEARCH_RESULTS_ID]
    #[arg(long)]
    output_id: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Also picks up log crate records from the library.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();
    let base_url = args.base_url.unwrap_or_else(|| CONFIG.base_url.clone());
    let input_id = args.input_id.unwrap_or_else(|| CONFIG.input_id.clone());
    let output_id = args.output_id.unwrap_or_else(|| CONFIG.results_id.clone());

    let transport = Arc::new(HttpTransport::new(&base_url)?);
    let page = Arc::new(MemoryPage::with_elements(&input_id, &output_id));
    let trigger = SearchTrigger::new(transport, page.clone()).with_elements(&input_id, &output_id);

    let mut pending = Vec::with_capacity(args.queries.len());
    for query in &args.queries {
        page.set_text(&input_id, query)?;
        pending.push((query.clone(), tokio::spawn(trigger.search_clients())));
    }

    for (query, handle) in pending {
        match handle.await? {
            Ok(()) => log::info!("search for {query:?} rendered"),
            Err(e) => log::error!("search for {query:?} failed: {:#}", e),
        }
    }

    println!("{}", page.content(&output_id).unwrap_or_default());
    Ok(())
}

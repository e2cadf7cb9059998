use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use search_index::config::get_config;
use search_index::query::preprocess::preprocess;
use search_index::Index;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = get_config(&args.path);
    let log_level = if args.verbose { Level::DEBUG } else { config.tracing_level() };
    tracing_subscriber::fmt().with_max_level(log_level).with_target(false).init();

    let max_results = args.max_results.unwrap_or(config.max_results);

    info!(path = %args.path.display(), "walking directory");
    let index = Index::from_directory(&args.path);
    info!(documents = index.document_count(), "index built");

    let tokens = preprocess(&args.query);
    let results = index.query(&tokens)?;

    if results.is_empty() {
        println!("No results found.");
    } else {
        for result in results.into_iter().take(max_results) {
            println!("{:>8.4}  {}", result.score, result.path);
        }
    }

    Ok(())
}

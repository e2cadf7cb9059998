use std::path::PathBuf;

use clap::Parser;

/// In-memory boolean full-text search over a directory tree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Boolean query, e.g. "cat AND dog" or "(cat OR fish) ANDNOT dog"
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Root directory to index
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Maximum number of results to print
    #[arg(short = 'n', long = "max-results")]
    pub max_results: Option<usize>,

    /// Increase log verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

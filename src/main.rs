// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Run the crawl-and-index pipeline
// 4. Exit with proper code (0 = success or usage error, 1 = run failed)
//
// A usage error (bad page budget, too many arguments) prints the usage line
// and exits 0 without writing an index file.
// =============================================================================

mod catalog; // src/catalog/ - course extraction and the word index
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - run configuration and defaults
mod crawl; // src/crawl/ - link discovery and the crawl frontier
mod error; // src/error.rs - typed errors
mod pipeline; // src/pipeline.rs - the end-to-end run

use clap::error::ErrorKind;
use clap::Parser;
use cli::{Cli, USAGE};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(_) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
    };

    init_logging(cli.verbose);

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            println!("{}", USAGE);
            std::process::exit(0);
        }
    };

    let exit_code = match pipeline::build_index(&config).await {
        Ok(summary) => {
            info!(
                "Done: {} page(s) discovered, {} indexed, {} row(s) written",
                summary.pages_discovered, summary.pages_indexed, summary.rows_written
            );
            0
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr. RUST_LOG overrides the level picked by --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   catalog-indexer [PAGE_BUDGET] [--course-map FILE] [--output FILE] ...
//
// The page budget is read as a raw string and validated by parse_budget(), so
// a bad value is reported with our own usage message instead of clap's.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{
    CrawlConfig, DEFAULT_COURSE_MAP, DEFAULT_INDEX_FILE, DEFAULT_PAGE_BUDGET,
    DEFAULT_TIMEOUT_SECS, LIMITING_DOMAIN, SEED_URL,
};
use crate::error::{IndexerError, Result};

pub const USAGE: &str = "usage: catalog-indexer [number of pages to crawl]";

#[derive(Parser, Debug)]
#[command(
    name = "catalog-indexer",
    version = "0.1.0",
    about = "Crawl a course catalog and build a word index of its courses",
    long_about = "catalog-indexer crawls the course catalog two links deep from its seed page, \
                  extracts every course block from the first PAGE_BUDGET pages it discovered \
                  and writes a pipe-delimited (course id, word) index."
)]
pub struct Cli {
    /// Number of discovered pages to index (default: 1000)
    pub page_budget: Option<String>,

    /// JSON file mapping course codes to course identifiers
    #[arg(long, default_value = DEFAULT_COURSE_MAP)]
    pub course_map: PathBuf,

    /// Where to write the index (overwritten if it exists)
    #[arg(long, short, default_value = DEFAULT_INDEX_FILE)]
    pub output: PathBuf,

    /// Page the crawl starts from
    #[arg(long, default_value = SEED_URL)]
    pub seed_url: String,

    /// Only follow links on this host and its subdomains
    #[arg(long, default_value = LIMITING_DOMAIN)]
    pub domain: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Pages fetched at once while extracting courses
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Log debug output
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    // Turns parsed arguments into a run configuration
    //
    // Errors: InvalidArgument if the page budget is not a non-negative integer
    pub fn into_config(self) -> Result<CrawlConfig> {
        let page_budget = match self.page_budget.as_deref() {
            Some(arg) => parse_budget(arg)?,
            None => DEFAULT_PAGE_BUDGET,
        };

        Ok(CrawlConfig {
            seed_url: self.seed_url,
            limiting_domain: self.domain,
            page_budget,
            course_map_path: self.course_map,
            output_path: self.output,
            timeout: Duration::from_secs(self.timeout),
            concurrency: usize::from(self.concurrency),
        })
    }
}

// Parses the page budget argument
pub fn parse_budget(arg: &str) -> Result<usize> {
    arg.trim()
        .parse::<usize>()
        .map_err(|_| IndexerError::InvalidArgument(arg.to_string()))
}

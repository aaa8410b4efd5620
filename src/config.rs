// src/config.rs
// =============================================================================
// Run configuration for one crawl-and-index pass.
//
// The defaults point at the archived college catalog snapshot. Every value
// can be overridden from the command line (see cli.rs).
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// Archived catalog index page the crawl starts from
pub const SEED_URL: &str = "http://www.classes.cs.uchicago.edu/archive/2015/winter\
/12200-1/new.collegecatalog.uchicago.edu/index.html";

/// Host (and its subdomains) that link discovery is restricted to
pub const LIMITING_DOMAIN: &str = "classes.cs.uchicago.edu";

pub const DEFAULT_PAGE_BUDGET: usize = 1000;
pub const DEFAULT_COURSE_MAP: &str = "course_map.json";
pub const DEFAULT_INDEX_FILE: &str = "catalog_index.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub seed_url: String,
    pub limiting_domain: String,
    /// Maximum number of discovered pages handed to extraction
    pub page_budget: usize,
    pub course_map_path: PathBuf,
    pub output_path: PathBuf,
    /// Per-request network timeout
    pub timeout: Duration,
    /// How many extraction fetches may be in flight at once
    pub concurrency: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: SEED_URL.to_string(),
            limiting_domain: LIMITING_DOMAIN.to_string(),
            page_budget: DEFAULT_PAGE_BUDGET,
            course_map_path: PathBuf::from(DEFAULT_COURSE_MAP),
            output_path: PathBuf::from(DEFAULT_INDEX_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: 1,
        }
    }
}

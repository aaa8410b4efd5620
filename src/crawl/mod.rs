// src/crawl/mod.rs
// =============================================================================
// This module handles crawling the catalog site.
//
// Submodules:
// - normalize: URL resolution, fragment stripping and the scope filter
// - links: extracts new in-scope links from a parsed page
// - fetch: HTTP client wrapper with a per-request timeout
// - frontier: the two-level breadth expansion from the seed page
// =============================================================================

mod fetch;
mod frontier;
mod links;
pub mod normalize;

pub use fetch::Fetcher;
pub use frontier::Frontier;

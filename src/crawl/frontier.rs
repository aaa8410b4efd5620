// src/crawl/frontier.rs
// =============================================================================
// The crawl frontier: a fixed two-level breadth expansion from the seed page.
//
// How it works:
// 1. Fetch the seed page and collect its in-scope links (level 1)
// 2. Visit every level-1 link in discovery order, appending any links we
//    haven't seen yet (level 2)
// 3. Return everything discovered, in discovery order
//
// Level-2 pages are discovered but never fetched here, and the seed itself is
// only in the result if some page links back to it. The caller truncates the
// result to its page budget.
//
// Fetches are awaited one at a time, so the discovery order is deterministic.
// =============================================================================

use scraper::Html;
use tracing::{debug, info, warn};

use super::fetch::Fetcher;
use super::links::{discover, LinkSet};
use super::normalize::in_scope;
use crate::error::{IndexerError, Result};

pub struct Frontier<'a> {
    fetcher: &'a Fetcher,
    limiting_domain: String,
    links: LinkSet,
}

impl<'a> Frontier<'a> {
    pub fn new(fetcher: &'a Fetcher, limiting_domain: impl Into<String>) -> Self {
        Self {
            fetcher,
            limiting_domain: limiting_domain.into(),
            links: LinkSet::new(),
        }
    }

    // Runs the two-phase expansion from `seed_url`
    //
    // Returns: every discovered URL, seed-page links first, then the links
    // found on each of those pages
    //
    // Errors: only if the seed page itself can't be fetched. A failing
    // level-1 page is logged and skipped.
    pub async fn expand(mut self, seed_url: &str) -> Result<Vec<String>> {
        if !in_scope(seed_url, &self.limiting_domain) {
            return Err(IndexerError::InvalidUrl(format!(
                "seed {} is outside {}",
                seed_url, self.limiting_domain
            )));
        }

        info!("Crawling seed page {}", seed_url);
        let seed_html = self.fetcher.fetch(seed_url).await?;
        let first_level = self.discover_from(seed_url, &seed_html);
        self.links.extend(first_level.iter().cloned());
        if self.links.is_empty() {
            warn!("Seed page {} has no in-scope links", seed_url);
        } else {
            info!("Seed page linked to {} page(s)", first_level.len());
        }

        for (position, url) in first_level.iter().enumerate() {
            debug!("Expanding [{}/{}]: {}", position + 1, first_level.len(), url);

            let html = match self.fetcher.fetch(url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Skipping {}: {}", url, e);
                    continue;
                }
            };

            let found = self.discover_from(url, &html);
            self.links.extend(found);
        }

        info!("Discovered {} page(s) in total", self.links.len());
        Ok(self.links.into_vec())
    }

    fn discover_from(&self, page_url: &str, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        discover(page_url, &document, &self.links, &self.limiting_domain)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does Frontier borrow the Fetcher (&'a Fetcher)?
//    - The pipeline reuses the same client for the extraction pass
//    - Borrowing lets both share one connection pool without cloning
//
// 2. Why does expand() take `mut self` instead of `&mut self`?
//    - A frontier is good for exactly one crawl
//    - Consuming it hands the LinkSet to the caller without a copy
//
// 3. What is first_level.iter().cloned()?
//    - iter() yields &String, cloned() turns each into an owned String
//    - We still need first_level afterwards for the second pass
// -----------------------------------------------------------------------------

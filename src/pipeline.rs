// src/pipeline.rs
// =============================================================================
// The end-to-end run: crawl, truncate, extract, index, write.
//
// What happens here:
// 1. Load the course map (fails fast, before any network traffic)
// 2. Expand the crawl frontier from the seed page
// 3. Keep the first `page_budget` discovered URLs
// 4. Fetch each kept page, extract its course blocks and index them
// 5. Write the deduplicated (course_id, word) rows to the output file
//
// Step 4 may keep up to `concurrency` fetches in flight, but pages are
// indexed strictly in discovery order.
// =============================================================================

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use scraper::Html;
use std::collections::BTreeSet;
use std::pin::pin;
use tracing::{info, warn};

use crate::catalog::{self, CourseMap, IndexEntry};
use crate::config::CrawlConfig;
use crate::crawl::{Fetcher, Frontier};

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub pages_discovered: usize,
    pub pages_indexed: usize,
    pub rows_written: usize,
}

// Runs the whole crawl-and-index pipeline
//
// Errors: course map unreadable, seed page unreachable, a course code with
// no identifier, or the index file can't be written. A single failing page
// during the crawl or extraction is only logged.
pub async fn build_index(config: &CrawlConfig) -> Result<IndexSummary> {
    let course_map = CourseMap::load(&config.course_map_path).with_context(|| {
        format!(
            "failed to load course map from {}",
            config.course_map_path.display()
        )
    })?;
    info!("Loaded {} course code(s)", course_map.len());
    if course_map.is_empty() {
        warn!("Course map is empty; any extracted course code will fail to resolve");
    }

    let fetcher = Fetcher::new(config.timeout).context("failed to create HTTP client")?;

    let mut urls = if config.page_budget == 0 {
        info!("Page budget is 0, skipping crawl");
        Vec::new()
    } else {
        Frontier::new(&fetcher, config.limiting_domain.as_str())
            .expand(&config.seed_url)
            .await
            .with_context(|| format!("failed to crawl from {}", config.seed_url))?
    };

    let pages_discovered = urls.len();
    urls.truncate(config.page_budget);
    info!(
        "Indexing {} of {} discovered page(s)",
        urls.len(),
        pages_discovered
    );

    let (entries, pages_indexed) =
        index_pages(&fetcher, &course_map, &urls, config.concurrency).await?;

    let rows_written = catalog::write_index(&config.output_path, &entries).with_context(|| {
        format!(
            "failed to write index to {}",
            config.output_path.display()
        )
    })?;
    info!(
        "Wrote {} row(s) to {}",
        rows_written,
        config.output_path.display()
    );

    Ok(IndexSummary {
        pages_discovered,
        pages_indexed,
        rows_written,
    })
}

// Fetches and indexes the given pages
//
// Returns: the collected entries and how many pages were fetched successfully
async fn index_pages(
    fetcher: &Fetcher,
    course_map: &CourseMap,
    urls: &[String],
    concurrency: usize,
) -> Result<(BTreeSet<IndexEntry>, usize)> {
    let mut entries = BTreeSet::new();
    let mut pages_indexed = 0;

    // `buffered` (not `buffer_unordered`) hands pages back in list order
    let mut pages = pin!(stream::iter(urls)
        .map(|url| async move { (url, fetcher.fetch(url).await) })
        .buffered(concurrency.max(1)));

    while let Some((url, fetched)) = pages.next().await {
        let html = match fetched {
            Ok(html) => html,
            Err(e) => {
                warn!("Skipping {}: {}", url, e);
                continue;
            }
        };

        let blocks = catalog::extract(&Html::parse_document(&html));
        let page_entries = catalog::index_pairs(course_map, &blocks)
            .with_context(|| format!("failed to index {}", url))?;

        info!(
            "Indexed {}: {} course block(s), {} pair(s)",
            url,
            blocks.len(),
            page_entries.len()
        );
        entries.extend(page_entries);
        pages_indexed += 1;
    }

    Ok((entries, pages_indexed))
}

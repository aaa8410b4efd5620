// src/crawl/fetch.rs
// =============================================================================
// Page fetching.
//
// A thin wrapper around a reqwest Client so every request in a run shares the
// same connection pool and timeout. A timeout, a connection failure and a
// non-2xx status all come back as an error for that one page; callers decide
// whether that is fatal.
// =============================================================================

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{IndexerError, Result};

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    // Creates a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("catalog-indexer/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    // Fetches a page and returns its body as text
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| IndexerError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndexerError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| IndexerError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}

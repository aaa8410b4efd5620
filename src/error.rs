// src/error.rs
// =============================================================================
// Typed errors for the crawl and index modules.
//
// The application layer (pipeline.rs, main.rs) wraps these with anyhow so a
// failure can carry the file or URL it happened on.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Transport failure, including timeouts
    #[error("HTTP request for {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// An extracted course code has no entry in the course map
    #[error("no course identifier mapped for code '{0}'")]
    KeyNotFound(String),

    #[error("invalid page budget '{0}': expected a non-negative integer")]
    InvalidArgument(String),

    #[error("course map error: {0}")]
    CourseMap(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IndexerError>;

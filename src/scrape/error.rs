// src/scrape/error.rs
use thiserror::Error;

/// One extraction attempt failed. Retried per [`RetryPolicy`](super::RetryPolicy), then surfaced.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("no contract table found on {url}")]
    TableNotFound { url: String },
}

//! Feed error types.
//!
//! Every variant means the feed is unavailable for this poll. Callers going
//! through [`crate::fetch_or_fallback`] never see them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the feed.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The feed returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a feed response.
    #[error("parse error: {0}")]
    Parse(String),
}

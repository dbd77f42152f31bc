//! Port for fetching remote text resources.
//!
//! The dictionary loader pulls every remote source through this trait, so
//! tests can feed it canned payloads and the HTTP client stays in the
//! infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Why a remote source could not be fetched.
///
/// Any variant means the source contributes nothing to the current load;
/// none of them is fatal.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("response too large: {0} bytes")]
    TooLarge(usize),

    #[error("request timed out")]
    Timeout,
}

/// Fetches a remote resource as text.
///
/// Implementations apply a bounded timeout; a hung source must degrade to
/// [`FetchError::Timeout`] rather than stall the load.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

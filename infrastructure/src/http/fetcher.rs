//! reqwest-backed implementation of [`TextFetcher`].

use async_trait::async_trait;
use noitu_application::ports::text_fetcher::{FetchError, TextFetcher};
use std::time::Duration;
use tracing::debug;

/// Maximum response body size (16 MB) — the public corpora are a few MB.
const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

const USER_AGENT: &str = "noitu/0.1 (word-chain helper)";

/// Text fetcher over a shared `reqwest` client with a bounded timeout.
pub struct HttpTextFetcher {
    client: reqwest::Client,
}

impl HttpTextFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TextFetcher for HttpTextFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "Fetching dictionary source");

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_length = response.content_length().unwrap_or(0);
        if content_length > MAX_BODY_SIZE as u64 {
            return Err(FetchError::TooLarge(content_length as usize));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Request(e.to_string())
            }
        })?;
        if body.len() > MAX_BODY_SIZE {
            return Err(FetchError::TooLarge(body.len()));
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

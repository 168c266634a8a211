//! Image-byte fetching, the only external collaborator of the extraction.

use std::time::Duration;

use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::blocking::Client;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches raw image bytes for the profile photo.
///
/// Failures are caught at the call site and degrade to an empty image
/// string — they never abort the extraction.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> Result<Bytes>;
}

/// Blocking HTTP fetcher. The request timeout lives here, at the
/// collaborator boundary.
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch image {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        response.bytes().context("Failed to read image body")
    }
}

/// Fetcher that never downloads anything; the extracted image is always
/// empty. For callers that only want the textual record, and for tests.
pub struct DisabledImageFetcher;

impl ImageFetcher for DisabledImageFetcher {
    fn fetch(&self, _url: &str) -> Result<Bytes> {
        anyhow::bail!("image fetching is disabled")
    }
}

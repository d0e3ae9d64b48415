//! HTTP page fetcher for ngefilm
//!
//! One GET per call with a browser-like User-Agent and a fixed timeout.
//! Non-2xx answers are errors. Nothing is retried.

use std::time::Duration;

use tracing::debug;

use crate::error::{NgefilmError, Result};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper used for every page the scraper touches
pub struct NgefilmClient {
    client: reqwest::Client,
}

impl NgefilmClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(NgefilmError::HttpError)?;

        Ok(Self { client })
    }

    /// Fetch the HTML body of an absolute URL
    ///
    /// # Errors
    /// - `HttpError` - Network error or timeout
    /// - `Status` - Server answered with a non-2xx status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(NgefilmError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NgefilmError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(NgefilmError::HttpError)
    }
}

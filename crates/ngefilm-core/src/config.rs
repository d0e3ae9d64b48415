//! Scraper configuration
//!
//! Hosts and politeness delays are injectable so the scraper can be
//! pointed at a mirror or a local mock server.

use std::time::Duration;

use crate::client::ClientConfig;

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://new17.ngefilm.site";
pub const DEFAULT_LATEST_BASE_URL: &str = "https://new18.ngefilm.site";

/// Per-operation site hosts
///
/// Search and latest uploads have historically been served from
/// different mirrors, so each gets its own base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL for `/?s=` queries (default: new17 mirror)
    pub search_base_url: String,
    /// Base URL of the homepage with "Upload Terbaru" (default: new18 mirror)
    pub latest_base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            latest_base_url: DEFAULT_LATEST_BASE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Both operations against a single host
    pub fn single_host(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            search_base_url: base_url.clone(),
            latest_base_url: base_url,
        }
    }
}

/// Fixed pauses between successive fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    /// Between movie player candidates (default: 200ms)
    pub player: Duration,
    /// Between server slots of one episode (default: 100ms)
    pub server_slot: Duration,
    /// Between episodes (default: 200ms)
    pub episode: Duration,
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self {
            player: Duration::from_millis(200),
            server_slot: Duration::from_millis(100),
            episode: Duration::from_millis(200),
        }
    }
}

impl DelayPolicy {
    /// No pauses at all, for tests against local fixtures
    pub fn none() -> Self {
        Self {
            player: Duration::ZERO,
            server_slot: Duration::ZERO,
            episode: Duration::ZERO,
        }
    }
}

/// Complete scraper configuration
#[derive(Debug, Clone, Default)]
pub struct ScraperConfig {
    pub client: ClientConfig,
    pub site: SiteConfig,
    pub delays: DelayPolicy,
}

/// Sleeps for `delay` unless it is zero
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

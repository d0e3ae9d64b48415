//! Command line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ngefilm_core::{
    ClientConfig, DEFAULT_LATEST_BASE_URL, DEFAULT_SEARCH_BASE_URL, DelayPolicy, ScraperConfig,
    SiteConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ngefilm-server")]
#[command(about = "JSON API extracting ngefilm players, search results and latest uploads")]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, env = "NGEFILM_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "NGEFILM_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory served for every non-API path
    #[arg(long, env = "NGEFILM_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Site used for search queries
    #[arg(long, env = "NGEFILM_SEARCH_BASE_URL", default_value = DEFAULT_SEARCH_BASE_URL)]
    pub search_base_url: String,

    /// Site whose homepage lists the latest uploads
    #[arg(long, env = "NGEFILM_LATEST_BASE_URL", default_value = DEFAULT_LATEST_BASE_URL)]
    pub latest_base_url: String,

    /// Per-request timeout towards the site
    #[arg(long, env = "NGEFILM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Pause between movie player pages, in milliseconds
    #[arg(long, env = "NGEFILM_PLAYER_DELAY_MS", default_value_t = 200)]
    pub player_delay_ms: u64,

    /// Pause between server slots of an episode, in milliseconds
    #[arg(long, env = "NGEFILM_SERVER_SLOT_DELAY_MS", default_value_t = 100)]
    pub server_slot_delay_ms: u64,

    /// Pause between episodes, in milliseconds
    #[arg(long, env = "NGEFILM_EPISODE_DELAY_MS", default_value_t = 200)]
    pub episode_delay_ms: u64,
}

impl ServerArgs {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn scraper_config(&self) -> ScraperConfig {
        ScraperConfig {
            client: ClientConfig {
                timeout_secs: self.timeout_secs,
                ..ClientConfig::default()
            },
            site: SiteConfig {
                search_base_url: self.search_base_url.clone(),
                latest_base_url: self.latest_base_url.clone(),
            },
            delays: DelayPolicy {
                player: Duration::from_millis(self.player_delay_ms),
                server_slot: Duration::from_millis(self.server_slot_delay_ms),
                episode: Duration::from_millis(self.episode_delay_ms),
            },
        }
    }
}

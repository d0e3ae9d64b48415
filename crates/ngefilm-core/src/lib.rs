//! ngefilm Scraper Core Library
//!
//! Provides an async API for extracting embedded player URLs, searching
//! titles and listing the latest uploads of the ngefilm streaming site.
//!
//! # Overview
//!
//! - HTTP client with a browser User-Agent and a fixed timeout
//! - HTML parsers for landing, player, search and homepage markup
//! - Heuristic movie/series classification
//! - High-level [`NgefilmScraper`] tying them together
//!
//! # Example
//!
//! ```no_run
//! use ngefilm_core::{ExtractionResult, NgefilmScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = NgefilmScraper::new()?;
//!
//!     let found = scraper.search("Inception", None).await?;
//!     for item in &found.results {
//!         println!("{}: {}", item.title, item.url);
//!     }
//!
//!     if let Some(first) = found.results.first() {
//!         if let ExtractionResult::Movie(movie) = scraper.extract(&first.url).await? {
//!             for player in movie.players {
//!                 println!("{} -> {}", player.server_name, player.iframe_url);
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Politeness
//!
//! Extraction fetches up to one page per server slot and pauses between
//! them (see [`DelayPolicy`]). A series costs up to 8 episodes times 7
//! fetches, so expect slow responses.

pub mod classify;
mod client;
mod config;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, NgefilmClient};

// Re-export configuration
pub use config::{
    DEFAULT_LATEST_BASE_URL, DEFAULT_SEARCH_BASE_URL, DelayPolicy, ScraperConfig, SiteConfig,
};

// Re-export error types
pub use error::{NgefilmError, Result};

// Re-export parser functions
pub use parser::{
    parse_episode_links, parse_iframe_src, parse_landing_page, parse_latest_uploads,
    parse_player_tabs, parse_search_results,
};

// Re-export main scraper API
pub use scraper::{DETAILED_EPISODES, MAX_EPISODES, NgefilmScraper};

// Re-export data types
pub use types::{
    EpisodeRecord, ErrorResult, ExtractionResult, ItemKind, LatestUploadItem,
    LatestUploadsResponse, MovieResult, PlayerKind, PlayerRecord, SearchResponse,
    SearchResultItem, SeriesResult,
};

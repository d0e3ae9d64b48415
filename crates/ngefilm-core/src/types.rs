//! Core data types for the ngefilm scraper
//!
//! Every record is built, returned and dropped within a single request.
//! All of them serialize to the JSON shapes served by the web API.

use serde::{Deserialize, Serialize};

/// Kind marker carried by every player record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerKind {
    #[default]
    Stream,
}

/// One attempted player page and the iframe found on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Tab label (e.g. "Server 1", "Streamtape")
    pub server_name: String,

    /// Absolute URL of the page embedding the player
    pub player_page_url: String,

    /// Iframe source, empty when none was found or the fetch failed
    pub iframe_url: String,

    #[serde(rename = "type", default)]
    pub kind: PlayerKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlayerRecord {
    pub fn found(server_name: String, player_page_url: String, iframe_url: String) -> Self {
        Self {
            server_name,
            player_page_url,
            iframe_url,
            kind: PlayerKind::Stream,
            error: None,
        }
    }

    pub fn failed(server_name: String, player_page_url: String, error: String) -> Self {
        Self {
            server_name,
            player_page_url,
            iframe_url: String::new(),
            kind: PlayerKind::Stream,
            error: Some(error),
        }
    }
}

/// A single episode of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub title: String,
    pub url: String,

    /// Empty for episodes past the eagerly-resolved prefix
    pub players: Vec<PlayerRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Players found on a movie page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieResult {
    pub title: String,
    pub url: String,
    pub players: Vec<PlayerRecord>,
}

/// Episodes found on a series page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub title: String,
    pub url: String,
    pub episodes: Vec<EpisodeRecord>,
    pub total_episodes: usize,
}

/// Result of `/api/extract`, tagged by `"type": "movie" | "series"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExtractionResult {
    Movie(MovieResult),
    Series(SeriesResult),
}

impl ExtractionResult {
    pub fn title(&self) -> &str {
        match self {
            ExtractionResult::Movie(movie) => &movie.title,
            ExtractionResult::Series(series) => &series.title,
        }
    }
}

/// Content type of a listed item, inferred from its URL or title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Movie,
    Series,
    Episode,
    Unknown,
}

/// One entry of a search result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
    pub image_url: String,

    /// Numeric-looking rating (e.g. "7.5"), empty when absent
    pub rating: String,

    #[serde(rename = "type")]
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,

    /// Unique by `url`
    pub results: Vec<SearchResultItem>,
    pub total_results: usize,
}

/// One entry of the homepage "Upload Terbaru" section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestUploadItem {
    pub title: String,
    pub url: String,
    pub image_url: String,
    pub rating: String,

    /// Release year (e.g. "2019"), empty when unknown
    pub year: String,

    #[serde(rename = "type")]
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestUploadsResponse {
    pub section_title: String,
    pub items: Vec<LatestUploadItem>,
    pub total_items: usize,
}

/// Body returned in place of a result when an operation fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

//! Main scraper API for ngefilm
//!
//! Combines the HTTP client with the page parsers. Every operation runs
//! its fetches one after another, pausing between them per the
//! configured [`DelayPolicy`].

use tracing::{info, warn};
use url::Url;

use crate::classify::ContentClass;
use crate::client::NgefilmClient;
use crate::config::{DelayPolicy, ScraperConfig, SiteConfig, pause};
use crate::error::{NgefilmError, Result};
use crate::parser::latest::LATEST_SECTION_TITLE;
use crate::parser::{
    EpisodeLink, PlayerCandidate, parse_iframe_src, parse_landing_page, parse_latest_uploads,
    parse_search_results,
};
use crate::types::{
    EpisodeRecord, ExtractionResult, LatestUploadsResponse, MovieResult, PlayerRecord,
    SearchResponse, SeriesResult,
};
use crate::url::{SERVER_SLOTS, build_search_url, episode_slot_url, synthesized_player_urls};

/// Episodes kept from a series page
pub const MAX_EPISODES: usize = 20;

/// Leading episodes whose server slots are resolved eagerly
pub const DETAILED_EPISODES: usize = 8;

/// Main scraper API for ngefilm
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent requests.
pub struct NgefilmScraper {
    client: NgefilmClient,
    site: SiteConfig,
    delays: DelayPolicy,
}

impl NgefilmScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ScraperConfig::default())
    }

    /// Create a new scraper with custom configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ScraperConfig) -> Result<Self> {
        let client = NgefilmClient::with_config(config.client)?;
        Ok(Self {
            client,
            site: config.site,
            delays: config.delays,
        })
    }

    /// Extract the players of a movie, or the episodes of a series
    ///
    /// # Arguments
    /// * `url` - Absolute URL of a movie or series page
    ///
    /// # Returns
    /// A movie or series result. Failures on individual player pages or
    /// episodes are recorded on the affected record instead of failing
    /// the whole extraction.
    ///
    /// # Errors
    /// - `Validation` if url is empty
    /// - `InvalidUrl` if url is not an absolute URL
    /// - `HttpError` / `Status` if the page itself cannot be fetched
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ngefilm_core::Result<()> {
    /// use ngefilm_core::{ExtractionResult, NgefilmScraper};
    /// let scraper = NgefilmScraper::new()?;
    /// match scraper.extract("https://new17.ngefilm.site/inception-2010/").await? {
    ///     ExtractionResult::Movie(movie) => {
    ///         for player in movie.players {
    ///             println!("{}: {}", player.server_name, player.iframe_url);
    ///         }
    ///     }
    ///     ExtractionResult::Series(series) => println!("{} episodes", series.total_episodes),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        let url = url.trim();
        if url.is_empty() {
            return Err(NgefilmError::Validation("URL is required".to_string()));
        }
        Url::parse(url).map_err(|e| NgefilmError::InvalidUrl(format!("{}: {}", url, e)))?;

        info!(url, "extracting players");
        let html = self.client.fetch(url).await?;
        let page = parse_landing_page(&html, url)?;

        let result = match page.route {
            ContentClass::Series => ExtractionResult::Series(
                self.extract_series_episodes(url, page.title, page.episodes)
                    .await,
            ),
            ContentClass::Movie => ExtractionResult::Movie(
                self.extract_movie_players(url, page.title, page.player_tabs)
                    .await,
            ),
        };

        info!(title = result.title(), "extraction finished");
        Ok(result)
    }

    /// Resolves every player of a movie page
    ///
    /// Without a tab list, six `player=N` candidates are tried.
    async fn extract_movie_players(
        &self,
        movie_url: &str,
        title: String,
        tabs: Option<Vec<PlayerCandidate>>,
    ) -> MovieResult {
        let candidates = tabs.unwrap_or_else(|| {
            synthesized_player_urls(movie_url)
                .into_iter()
                .enumerate()
                .map(|(index, player_page_url)| PlayerCandidate {
                    server_name: format!("Server {}", index + 1),
                    player_page_url,
                })
                .collect()
        });

        let mut players = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.into_iter().enumerate() {
            if index > 0 {
                pause(self.delays.player).await;
            }
            players.push(
                self.resolve_player(candidate.server_name, candidate.player_page_url)
                    .await,
            );
        }

        MovieResult {
            title,
            url: movie_url.to_string(),
            players,
        }
    }

    /// Resolves the leading episodes of a series
    ///
    /// Keeps at most [`MAX_EPISODES`]; only the first
    /// [`DETAILED_EPISODES`] get their server slots fetched.
    async fn extract_series_episodes(
        &self,
        series_url: &str,
        title: String,
        mut episodes: Vec<EpisodeLink>,
    ) -> SeriesResult {
        episodes.truncate(MAX_EPISODES);
        let total_episodes = episodes.len();

        let mut records = Vec::with_capacity(total_episodes);
        for (index, episode) in episodes.into_iter().enumerate() {
            if index >= DETAILED_EPISODES {
                records.push(EpisodeRecord {
                    title: episode.title,
                    url: episode.url,
                    players: Vec::new(),
                    error: None,
                });
                continue;
            }

            if index > 0 {
                pause(self.delays.episode).await;
            }
            records.push(self.extract_episode(episode).await);
        }

        SeriesResult {
            title,
            url: series_url.to_string(),
            episodes: records,
            total_episodes,
        }
    }

    async fn extract_episode(&self, episode: EpisodeLink) -> EpisodeRecord {
        if let Err(e) = self.client.fetch(&episode.url).await {
            warn!(url = %episode.url, error = %e, "episode page unavailable");
            return EpisodeRecord {
                title: episode.title,
                url: episode.url,
                players: Vec::new(),
                error: Some(e.to_string()),
            };
        }

        let mut players = Vec::with_capacity(SERVER_SLOTS);
        for slot in 1..=SERVER_SLOTS {
            if slot > 1 {
                pause(self.delays.server_slot).await;
            }
            players.push(
                self.resolve_player(
                    format!("Server {}", slot),
                    episode_slot_url(&episode.url, slot),
                )
                .await,
            );
        }

        EpisodeRecord {
            title: episode.title,
            url: episode.url,
            players,
            error: None,
        }
    }

    /// Fetches one player page, recording a failure instead of returning it
    async fn resolve_player(&self, server_name: String, player_page_url: String) -> PlayerRecord {
        match self.fetch_iframe(&player_page_url).await {
            Ok(iframe_url) => PlayerRecord::found(server_name, player_page_url, iframe_url),
            Err(e) => {
                warn!(url = %player_page_url, error = %e, "player page failed");
                PlayerRecord::failed(server_name, player_page_url, e.to_string())
            }
        }
    }

    async fn fetch_iframe(&self, player_page_url: &str) -> Result<String> {
        let html = self.client.fetch(player_page_url).await?;
        parse_iframe_src(&html)
    }

    /// Search movies and series by title
    ///
    /// # Arguments
    /// * `query` - Search query string
    /// * `content_type` - Optional `post_type` filter (`"post"` or `"tv"`);
    ///   both are searched when absent
    ///
    /// # Errors
    /// - `Validation` if query is empty or whitespace only
    /// - `HttpError` / `Status` if the results page cannot be fetched
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ngefilm_core::Result<()> {
    /// use ngefilm_core::NgefilmScraper;
    /// let scraper = NgefilmScraper::new()?;
    /// let response = scraper.search("Inception", None).await?;
    /// for item in response.results {
    ///     println!("{:?} {}: {}", item.kind, item.title, item.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str, content_type: Option<&str>) -> Result<SearchResponse> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(NgefilmError::Validation("Query is required".to_string()));
        }

        let search_url = build_search_url(&self.site.search_base_url, trimmed, content_type);
        info!(url = %search_url, "searching");

        let html = self.client.fetch(&search_url).await?;
        let results = parse_search_results(&html, &self.site.search_base_url)?;

        Ok(SearchResponse {
            query: query.to_string(),
            total_results: results.len(),
            results,
        })
    }

    /// Latest uploads listed on the homepage
    ///
    /// # Errors
    /// - `HttpError` / `Status` if the homepage cannot be fetched
    /// - `ElementNotFound` if the "Upload Terbaru" section is missing
    pub async fn latest_uploads(&self) -> Result<LatestUploadsResponse> {
        let home_url = format!("{}/", self.site.latest_base_url.trim_end_matches('/'));
        info!(url = %home_url, "fetching latest uploads");

        let html = self.client.fetch(&home_url).await?;
        let items = parse_latest_uploads(&html, &home_url)?;

        Ok(LatestUploadsResponse {
            section_title: LATEST_SECTION_TITLE.to_string(),
            total_items: items.len(),
            items,
        })
    }
}

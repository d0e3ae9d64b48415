//! Landing page parser
//!
//! Reads everything the extractors need from a movie or series page in
//! one pass: title, route, player tabs and the episode list.

use scraper::Html;

use super::episodes::{EpisodeLink, parse_episode_links};
use super::player::{PlayerCandidate, parse_player_tabs};
use super::{element_text, selector};
use crate::classify::{ContentClass, extraction_route, is_episode_href};
use crate::error::Result;

const TITLE_SELECTOR: &str = "h1.entry-title";
const UNKNOWN_TITLE: &str = "Unknown Title";

/// Owned summary of a movie or series page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    pub title: String,
    /// Extractor this page is routed to
    pub route: ContentClass,
    /// Player tabs, `None` when the page has no tab list
    pub player_tabs: Option<Vec<PlayerCandidate>>,
    /// Accepted episode links, in page order
    pub episodes: Vec<EpisodeLink>,
}

/// Parses a landing page fetched from `page_url`
pub fn parse_landing_page(html: &str, page_url: &str) -> Result<LandingPage> {
    let document = Html::parse_document(html);

    let title = document
        .select(&selector(TITLE_SELECTOR)?)
        .next()
        .map(|h1| element_text(&h1))
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let episode_hrefs: Vec<String> = document
        .select(&selector("a[href]")?)
        .filter_map(|link| link.value().attr("href"))
        .filter(|href| is_episode_href(href))
        .map(str::to_string)
        .collect();

    let route = extraction_route(page_url, &episode_hrefs, &title);

    let (player_tabs, episodes) = match route {
        ContentClass::Series => (None, parse_episode_links(&document, page_url)?),
        ContentClass::Movie => (parse_player_tabs(&document, page_url)?, Vec::new()),
    };

    Ok(LandingPage {
        title,
        route,
        player_tabs,
        episodes,
    })
}

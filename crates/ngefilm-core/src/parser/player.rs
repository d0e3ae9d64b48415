//! Player page parsers
//!
//! Reads the player tab list of a movie page and the iframe embedded
//! in a player page.

use scraper::Html;

use super::{element_text, first_attr, selector};
use crate::error::Result;
use crate::url::resolve_url;

/// Tab list holding one link per hosting server
pub const PLAYER_TABS_SELECTOR: &str = "ul.muvipro-player-tabs";

/// Lazy-loaded iframes keep the real source here
const IFRAME_SOURCE_ATTRS: [&str; 2] = ["data-litespeed-src", "src"];

const BLANK_IFRAME: &str = "about:blank";

/// A player page still to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCandidate {
    pub server_name: String,
    pub player_page_url: String,
}

/// Reads the player tabs of a movie page
///
/// # Arguments
/// * `document` - Parsed movie page
/// * `movie_url` - URL the page was fetched from, used to resolve hrefs
///
/// # Returns
/// `None` when the page has no tab list, otherwise one candidate per
/// tab link. Tabs without text are named "Server N" by position.
pub fn parse_player_tabs(document: &Html, movie_url: &str) -> Result<Option<Vec<PlayerCandidate>>> {
    let tabs_selector = selector(PLAYER_TABS_SELECTOR)?;
    let Some(tabs) = document.select(&tabs_selector).next() else {
        return Ok(None);
    };

    let link_selector = selector("a[href]")?;
    let candidates = tabs
        .select(&link_selector)
        .enumerate()
        .filter_map(|(index, link)| {
            let href = link.value().attr("href")?;
            let text = element_text(&link);
            let server_name = if text.is_empty() {
                format!("Server {}", index + 1)
            } else {
                text
            };

            Some(PlayerCandidate {
                server_name,
                player_page_url: resolve_url(movie_url, href),
            })
        })
        .collect();

    Ok(Some(candidates))
}

/// Extracts the stream URL from a player page
///
/// Takes the first `<iframe>`, preferring `data-litespeed-src` over
/// `src`. Returns an empty string when there is no iframe or its source
/// is `about:blank`.
pub fn parse_iframe_src(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let iframe_selector = selector("iframe")?;

    let src = document
        .select(&iframe_selector)
        .next()
        .and_then(|iframe| first_attr(&iframe, &IFRAME_SOURCE_ATTRS))
        .filter(|src| src != BLANK_IFRAME)
        .unwrap_or_default();

    Ok(src)
}

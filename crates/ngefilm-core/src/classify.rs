//! Content classification heuristics
//!
//! Pure functions over URL, link list and title text. Every pattern
//! lives in a named regex so it can be tested on its own.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ItemKind;
use crate::url::{LEGACY_SERIES_PATH_MARKER, is_episode_url, is_series_url};

/// Href of an episode page
pub static EPISODE_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/eps/").expect("episode href regex"));

/// Link text shaped like `Eps12`
pub static EPS_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Eps\d+").expect("eps number regex"));

/// Placeholder link opening the episode picker
pub static EPISODE_PICKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pilih episode|choose episode").expect("picker regex"));

/// First number in a rating label, e.g. "Rating: 7.4/10" -> "7.4"
pub static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)").expect("rating regex"));

/// Year in a title, e.g. "Dune (2021)", "Dune - 2021", "Dune, 2021"
pub static TITLE_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\(|-|,)\s*(20\d{2}|19\d{2})\s*[\)\]-]?").expect("title year regex")
});

/// Absolute URL with exactly one path segment and a trailing slash
pub static SINGLE_SEGMENT_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/]+/[\w\-]+/$").expect("single segment regex"));

/// A path segment made only of word characters and dashes
pub static PATH_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-]+$").expect("path segment regex"));

/// Title words marking a homepage card as a series
const SERIES_TITLE_KEYWORDS: [&str; 4] = ["season", "episode", "eps", "series"];

/// Link texts belonging to pagination and navigation
const NAVIGATION_KEYWORDS: [&str; 5] = ["page", "next", "prev", "berikut", "sebelum"];

/// What a landing page holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClass {
    Movie,
    Series,
}

/// Classifies a landing page
///
/// Series when any of these holds: the URL carries the series marker,
/// at least one episode link was found, or the title mentions "episode".
pub fn classify(url: &str, episode_links: &[String], title: &str) -> ContentClass {
    if is_series_url(url)
        || !episode_links.is_empty()
        || title.to_lowercase().contains("episode")
    {
        ContentClass::Series
    } else {
        ContentClass::Movie
    }
}

/// Picks the extractor for a landing page
///
/// A series page without any discoverable episode link is handled like
/// a movie so its own player tabs still get extracted.
pub fn extraction_route(url: &str, episode_links: &[String], title: &str) -> ContentClass {
    match classify(url, episode_links, title) {
        ContentClass::Series if !episode_links.is_empty() => ContentClass::Series,
        _ => ContentClass::Movie,
    }
}

/// True when an href points at an episode page
pub fn is_episode_href(href: &str) -> bool {
    EPISODE_HREF_RE.is_match(href)
}

/// True when link text names an episode ("Eps 3", "Episode 3", "Eps3")
pub fn is_episode_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("eps") || lower.contains("episode") || EPS_NUMBER_RE.is_match(text)
}

/// True for the "Pilih Episode" / "Choose Episode" placeholder
pub fn is_episode_picker(text: &str) -> bool {
    EPISODE_PICKER_RE.is_match(text)
}

/// True for pagination and navigation link texts
pub fn is_navigation_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    NAVIGATION_KEYWORDS.iter().any(|word| lower.contains(word))
}

/// Item type of a search result, from its URL alone
pub fn item_kind_from_url(url: &str) -> ItemKind {
    if is_series_url(url) {
        ItemKind::Series
    } else if is_episode_url(url) {
        ItemKind::Episode
    } else {
        ItemKind::Movie
    }
}

/// Item type of a homepage card, from title keywords or URL
pub fn latest_item_kind(title: &str, url: &str) -> ItemKind {
    let lower = title.to_lowercase();
    if SERIES_TITLE_KEYWORDS.iter().any(|word| lower.contains(word))
        || is_series_url(url)
        || url.contains(LEGACY_SERIES_PATH_MARKER)
    {
        ItemKind::Series
    } else {
        ItemKind::Movie
    }
}

/// First numeric-looking piece of a rating label
pub fn extract_rating(text: &str) -> Option<String> {
    RATING_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Release year embedded in a title
pub fn extract_title_year(title: &str) -> Option<String> {
    TITLE_YEAR_RE
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// True when an href has a `/segment/` piece that is not pagination
pub fn has_content_segment(href: &str) -> bool {
    let pieces: Vec<&str> = href.split('/').collect();
    if pieces.len() < 3 {
        return false;
    }

    pieces[1..pieces.len() - 1]
        .iter()
        .any(|segment| PATH_SEGMENT_RE.is_match(segment) && !segment.contains("page"))
}

/// True when an href looks like content for the broad search scan
pub fn is_content_href(href: &str) -> bool {
    is_series_url(href) || is_episode_url(href) || SINGLE_SEGMENT_URL_RE.is_match(href)
}

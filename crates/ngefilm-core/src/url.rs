//! URL helper functions for ngefilm
//!
//! Builds search and player URLs and resolves relative links.

use url::Url;

/// Path piece marking a series page
pub const SERIES_PATH_MARKER: &str = "/tv/";

/// Path piece marking an episode page
pub const EPISODE_PATH_MARKER: &str = "/eps/";

/// Older series path still present on some homepage cards
pub const LEGACY_SERIES_PATH_MARKER: &str = "/series/";

/// Number of alternate hosting servers exposed via `player=N`
pub const SERVER_SLOTS: usize = 6;

/// Builds the search URL for a query
///
/// The query is form-encoded (spaces become `+`). Without a content type
/// filter both `post` (movies) and `tv` (series) are requested.
///
/// # Example
/// ```
/// use ngefilm_core::url::build_search_url;
/// let url = build_search_url("https://new17.ngefilm.site", "the matrix", None);
/// assert_eq!(
///     url,
///     "https://new17.ngefilm.site/?s=the+matrix&post_type[]=post&post_type[]=tv"
/// );
/// ```
pub fn build_search_url(base_url: &str, query: &str, content_type: Option<&str>) -> String {
    let encoded = urlencoding::encode(query).replace("%20", "+");
    let mut url = format!("{}/?s={}", base_url.trim_end_matches('/'), encoded);

    match content_type.map(str::trim).filter(|t| !t.is_empty()) {
        Some(kind) => {
            url.push_str("&post_type[]=");
            url.push_str(&urlencoding::encode(kind));
        }
        None => url.push_str("&post_type[]=post&post_type[]=tv"),
    }

    url
}

/// Appends `player=N` to a page URL
///
/// Uses `&` when the URL already carries a query string, `?` otherwise.
///
/// # Example
/// ```
/// use ngefilm_core::url::player_url;
/// assert_eq!(player_url("https://x.site/film/", 2), "https://x.site/film/?player=2");
/// assert_eq!(player_url("https://x.site/?p=9", 3), "https://x.site/?p=9&player=3");
/// ```
pub fn player_url(base_url: &str, slot: usize) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}player={}", base_url, separator, slot)
}

/// Candidate player pages for a movie without a tab list
///
/// Every slot, including the first, gets an explicit `player=N`.
pub fn synthesized_player_urls(movie_url: &str) -> Vec<String> {
    (1..=SERVER_SLOTS)
        .map(|slot| player_url(movie_url, slot))
        .collect()
}

/// URL of one server slot of an episode
///
/// Slot 1 is the episode page itself; the others use `player=N`.
pub fn episode_slot_url(episode_url: &str, slot: usize) -> String {
    if slot <= 1 {
        episode_url.to_string()
    } else {
        player_url(episode_url, slot)
    }
}

/// Resolves an href found on `page_url` to an absolute URL
///
/// Hrefs already starting with `http` are kept verbatim. If the page URL
/// cannot be parsed the href is returned unchanged.
///
/// # Example
/// ```
/// use ngefilm_core::url::resolve_url;
/// let url = resolve_url("https://x.site/tv/loki/", "/eps/loki-episode-1/");
/// assert_eq!(url, "https://x.site/eps/loki-episode-1/");
/// ```
pub fn resolve_url(page_url: &str, href: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }

    Url::parse(page_url)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}

/// True when the URL points at a series page
pub fn is_series_url(url: &str) -> bool {
    url.contains(SERIES_PATH_MARKER)
}

/// True when the URL points at an episode page
pub fn is_episode_url(url: &str) -> bool {
    url.contains(EPISODE_PATH_MARKER)
}

//! Episode list parser for series pages

use std::collections::HashSet;

use scraper::{ElementRef, Html};

use super::{element_text, selector};
use crate::classify::{is_episode_href, is_episode_picker, is_episode_text};
use crate::error::Result;
use crate::url::resolve_url;

/// Container holding the episode buttons of a series page
pub const EPISODE_LIST_SELECTOR: &str = "div.gmr-listseries";

/// An episode link found on a series page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeLink {
    pub title: String,
    pub url: String,
}

/// Collects the episode links of a series page
///
/// Reads the first episode list container. When it yields nothing, every
/// link on the page is scanned instead and duplicates are dropped.
///
/// # Arguments
/// * `document` - Parsed series page
/// * `series_url` - URL the page was fetched from, used to resolve hrefs
pub fn parse_episode_links(document: &Html, series_url: &str) -> Result<Vec<EpisodeLink>> {
    let link_selector = selector("a[href]")?;
    let container_selector = selector(EPISODE_LIST_SELECTOR)?;

    if let Some(container) = document.select(&container_selector).next() {
        let episodes: Vec<EpisodeLink> = container
            .select(&link_selector)
            .filter_map(|link| episode_link(&link, series_url))
            .collect();

        if !episodes.is_empty() {
            return Ok(episodes);
        }
    }

    let mut seen = HashSet::new();
    let episodes = document
        .select(&link_selector)
        .filter_map(|link| episode_link(&link, series_url))
        .filter(|episode| seen.insert(episode.url.clone()))
        .collect();

    Ok(episodes)
}

/// Accepts a link when both its href and its text name an episode
fn episode_link(link: &ElementRef, series_url: &str) -> Option<EpisodeLink> {
    let href = link.value().attr("href")?;
    let text = element_text(link);

    if is_episode_picker(&text) || !is_episode_href(href) || !is_episode_text(&text) {
        return None;
    }

    Some(EpisodeLink {
        title: text,
        url: resolve_url(series_url, href),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIES_URL: &str = "https://new17.ngefilm.site/tv/loki/";

    #[test]
    fn test_parse_episode_list_container() {
        let html = Html::parse_document(
            r#"
            <div class="gmr-listseries">
                <a href="https://new17.ngefilm.site/tv/loki/">Pilih Episode</a>
                <a href="/eps/loki-season-1-episode-1/">Eps1</a>
                <a href="/eps/loki-season-1-episode-2/">Eps2</a>
                <a href="/eps/loki-season-1-episode-2/">Eps2</a>
                <a href="/trailer/">Trailer</a>
            </div>
            <a href="/eps/other-show-episode-9/">Eps9</a>
            "#,
        );

        let episodes = parse_episode_links(&html, SERIES_URL).unwrap();
        assert_eq!(episodes.len(), 3);
        assert_eq!(episodes[0].title, "Eps1");
        assert_eq!(
            episodes[0].url,
            "https://new17.ngefilm.site/eps/loki-season-1-episode-1/"
        );
        assert_eq!(episodes[2].title, "Eps2");
    }

    #[test]
    fn test_parse_episode_links_fallback_dedupes() {
        let html = Html::parse_document(
            r#"
            <div class="entry-content">
                <a href="/eps/loki-episode-1/">Episode 1</a>
                <a href="/eps/loki-episode-1/">Episode 1</a>
                <a href="/eps/loki-episode-2/">Episode 2</a>
                <a href="/eps/loki-episode-3/">Watch now</a>
            </div>
            "#,
        );

        let episodes = parse_episode_links(&html, SERIES_URL).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[1].url, "https://new17.ngefilm.site/eps/loki-episode-2/");
    }

    #[test]
    fn test_empty_container_falls_back_to_page_scan() {
        let html = Html::parse_document(
            r#"
            <div class="gmr-listseries"><a href="/tv/loki/">Pilih Episode</a></div>
            <a href="/eps/loki-episode-1/">Eps 1</a>
            "#,
        );

        let episodes = parse_episode_links(&html, SERIES_URL).unwrap();
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].title, "Eps 1");
    }

    #[test]
    fn test_no_episode_links() {
        let html = Html::parse_document("<a href='/inception/'>Inception</a>");
        assert!(parse_episode_links(&html, SERIES_URL).unwrap().is_empty());
    }
}

//! HTML parsers for ngefilm
//!
//! Contains modules for parsing different page types. Parsers take raw
//! HTML and return owned data, so no DOM outlives a single call.

pub mod episodes;
pub mod latest;
pub mod page;
pub mod player;
pub mod search;

pub use episodes::{EpisodeLink, parse_episode_links};
pub use latest::parse_latest_uploads;
pub use page::{LandingPage, parse_landing_page};
pub use player::{PlayerCandidate, parse_iframe_src, parse_player_tabs};
pub use search::parse_search_results;

use scraper::{ElementRef, Html, Selector};

use crate::error::{NgefilmError, Result};

/// Parses a CSS selector, mapping failures to `ParseError`
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| NgefilmError::ParseError(format!("Invalid selector {:?}: {:?}", css, e)))
}

/// Trimmed text content of an element
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// First non-empty attribute among `names`
pub(crate) fn first_attr(element: &ElementRef, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| element.value().attr(name))
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Ordered CSS strategies, tried until one matches something
#[derive(Debug, Clone, Copy)]
pub struct SelectorChain {
    strategies: &'static [&'static str],
}

impl SelectorChain {
    pub const fn new(strategies: &'static [&'static str]) -> Self {
        Self { strategies }
    }

    /// Elements of the first strategy yielding at least one match
    pub fn select<'a>(&self, document: &'a Html) -> Result<Vec<ElementRef<'a>>> {
        for css in self.strategies {
            let matches: Vec<ElementRef<'a>> = document.select(&selector(css)?).collect();
            if !matches.is_empty() {
                return Ok(matches);
            }
        }
        Ok(Vec::new())
    }

    /// Same as [`SelectorChain::select`], scoped to one element
    pub fn select_in<'a>(&self, element: &ElementRef<'a>) -> Result<Option<ElementRef<'a>>> {
        for css in self.strategies {
            if let Some(found) = element.select(&selector(css)?).next() {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN: SelectorChain = SelectorChain::new(&["article.card", "article"]);

    #[test]
    fn test_chain_uses_first_matching_strategy() {
        let html = Html::parse_document(
            r#"<article class="card">A</article><article>B</article>"#,
        );
        let found = CHAIN.select(&html).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(element_text(&found[0]), "A");
    }

    #[test]
    fn test_chain_falls_back() {
        let html = Html::parse_document("<article>B</article><article>C</article>");
        let found = CHAIN.select(&html).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_chain_no_match() {
        let html = Html::parse_document("<div>nothing</div>");
        assert!(CHAIN.select(&html).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_selector_is_parse_error() {
        let result = selector("a[");
        assert!(matches!(result, Err(NgefilmError::ParseError(_))));
    }

    #[test]
    fn test_first_attr_skips_empty() {
        let html = Html::parse_fragment(r#"<img data-src="" src="/poster.jpg">"#);
        let img = html.select(&selector("img").unwrap()).next().unwrap();
        assert_eq!(
            first_attr(&img, &["data-src", "src"]),
            Some("/poster.jpg".to_string())
        );
    }
}

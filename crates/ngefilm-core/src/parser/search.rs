//! Search results parser for ngefilm
//!
//! Parses HTML from the `/?s=` results page. Item cards are read first;
//! when none yield a usable entry, every link on the page is scanned.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{SelectorChain, element_text, first_attr, selector};
use crate::classify::{
    extract_rating, has_content_segment, is_content_href, is_navigation_text, item_kind_from_url,
};
use crate::error::Result;
use crate::types::SearchResultItem;
use crate::url::resolve_url;

/// Result cards, strictest selector first
pub const ITEM_CARD_CHAIN: SelectorChain =
    SelectorChain::new(&["article.item-infinite", "article[itemscope]"]);

/// Card headings holding the title link
pub const CARD_TITLE_CHAIN: SelectorChain = SelectorChain::new(&["h2.entry-title", "h2"]);

/// Lazy-load attribute first, then the eager one
pub const IMAGE_SOURCE_ATTRS: [&str; 2] = ["data-src", "src"];

const UNTITLED: &str = "Untitled";

/// Selectors used inside a single card
pub(crate) struct CardSelectors {
    link: Selector,
    href: Selector,
    image: Selector,
    rating: Selector,
}

impl CardSelectors {
    pub(crate) fn new(rating_css: &str) -> Result<Self> {
        Ok(Self {
            link: selector("a")?,
            href: selector("a[href]")?,
            image: selector("img")?,
            rating: selector(rating_css)?,
        })
    }

    /// Text of the first link inside the card heading
    pub(crate) fn title(&self, heading: Option<&ElementRef>) -> String {
        heading
            .and_then(|h| h.select(&self.link).next())
            .map(|link| element_text(&link))
            .unwrap_or_default()
    }

    pub(crate) fn first_href(&self, scope: &ElementRef) -> Option<String> {
        scope
            .select(&self.href)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string)
    }

    pub(crate) fn image_url(&self, card: &ElementRef) -> String {
        card.select(&self.image)
            .next()
            .and_then(|img| first_attr(&img, &IMAGE_SOURCE_ATTRS))
            .unwrap_or_default()
    }

    pub(crate) fn rating(&self, card: &ElementRef) -> String {
        card.select(&self.rating)
            .next()
            .and_then(|el| extract_rating(&element_text(&el)))
            .unwrap_or_default()
    }
}

/// Parses search results HTML
///
/// # Arguments
/// * `html` - Raw HTML string from the search results page
/// * `base_url` - Site base URL used to resolve relative links
///
/// # Returns
/// Results unique by URL, each with a non-empty title and URL. Empty
/// when nothing looks like content.
///
/// # Errors
/// Returns `ParseError` if a selector cannot be built
pub fn parse_search_results(html: &str, base_url: &str) -> Result<Vec<SearchResultItem>> {
    let document = Html::parse_document(html);

    let results = parse_item_cards(&document, base_url)?;
    if !results.is_empty() {
        return Ok(results);
    }

    debug!("no search result cards, scanning page links");
    parse_link_scan(&document, base_url)
}

/// Structured pass over item cards
fn parse_item_cards(document: &Html, base_url: &str) -> Result<Vec<SearchResultItem>> {
    let selectors = CardSelectors::new(r#"[class*="rating"]"#)?;
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for card in ITEM_CARD_CHAIN.select(document)? {
        let Some(item) = parse_item_card(&card, &selectors, base_url)? else {
            continue;
        };
        if seen.insert(item.url.clone()) {
            results.push(item);
        }
    }

    Ok(results)
}

/// Reads one card, `None` when it lacks a title or a link
fn parse_item_card(
    card: &ElementRef,
    selectors: &CardSelectors,
    base_url: &str,
) -> Result<Option<SearchResultItem>> {
    let heading = CARD_TITLE_CHAIN.select_in(card)?;
    let title = selectors.title(heading.as_ref());

    let url = match heading {
        Some(_) => selectors
            .first_href(card)
            .map(|href| resolve_url(base_url, &href))
            .unwrap_or_default(),
        None => String::new(),
    };

    if title.is_empty() || url.is_empty() {
        return Ok(None);
    }

    Ok(Some(SearchResultItem {
        kind: item_kind_from_url(&url),
        image_url: selectors.image_url(card),
        rating: selectors.rating(card),
        title,
        url,
    }))
}

/// Broad pass over every link that looks like content
fn parse_link_scan(document: &Html, base_url: &str) -> Result<Vec<SearchResultItem>> {
    let link_selector = selector("a[href]")?;
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for link in document.select(&link_selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !has_content_segment(href) {
            continue;
        }

        let text = element_text(&link);
        if is_navigation_text(&text) || !is_content_href(href) {
            continue;
        }

        let url = resolve_url(base_url, href);
        if !seen.insert(url.clone()) {
            continue;
        }

        results.push(SearchResultItem {
            title: if text.is_empty() { UNTITLED.to_string() } else { text },
            kind: item_kind_from_url(&url),
            url,
            image_url: String::new(),
            rating: String::new(),
        });
    }

    Ok(results)
}

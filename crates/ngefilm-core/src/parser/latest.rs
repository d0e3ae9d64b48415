//! Homepage parser for the "Upload Terbaru" section

use scraper::{ElementRef, Html, Selector};

use super::search::CardSelectors;
use super::{element_text, selector};
use crate::classify::{extract_title_year, latest_item_kind};
use crate::error::{NgefilmError, Result};
use crate::types::LatestUploadItem;
use crate::url::resolve_url;

/// Heading text identifying the section
pub const LATEST_SECTION_TITLE: &str = "Upload Terbaru";

/// Maximum number of cards read from the section
pub const MAX_LATEST_ITEMS: usize = 20;

const SECTION_HEADING_SELECTOR: &str = "h3.homemodule-title";
const GRID_SELECTOR: &str = "div#gmr-main-load";
const CARD_SELECTOR: &str = "article.item-infinite";
const CARD_TITLE_SELECTOR: &str = "h2.entry-title";
const RATING_SELECTOR: &str = ".gmr-rating-item";
const DATE_SELECTOR: &str = "time.screen-reader-text[datetime]";

/// Parses the latest uploads from the homepage
///
/// Only the first [`MAX_LATEST_ITEMS`] cards are considered; cards
/// without a title or link are dropped. Relative links are resolved
/// against `page_url`.
///
/// # Errors
/// - `ElementNotFound` if the section heading or its grid is missing
/// - `ParseError` if a selector cannot be built
pub fn parse_latest_uploads(html: &str, page_url: &str) -> Result<Vec<LatestUploadItem>> {
    let document = Html::parse_document(html);

    let has_section = document
        .select(&selector(SECTION_HEADING_SELECTOR)?)
        .any(|heading| element_text(&heading) == LATEST_SECTION_TITLE);
    if !has_section {
        return Err(NgefilmError::ElementNotFound(format!(
            "{} section",
            LATEST_SECTION_TITLE
        )));
    }

    let grid = document
        .select(&selector(GRID_SELECTOR)?)
        .next()
        .ok_or_else(|| NgefilmError::ElementNotFound(GRID_SELECTOR.to_string()))?;

    let selectors = CardSelectors::new(RATING_SELECTOR)?;
    let title_selector = selector(CARD_TITLE_SELECTOR)?;
    let date_selector = selector(DATE_SELECTOR)?;

    let mut items = Vec::new();
    for card in grid.select(&selector(CARD_SELECTOR)?).take(MAX_LATEST_ITEMS) {
        if let Some(item) =
            parse_latest_card(&card, &selectors, &title_selector, &date_selector, page_url)
        {
            items.push(item);
        }
    }

    Ok(items)
}

fn parse_latest_card(
    card: &ElementRef,
    selectors: &CardSelectors,
    title_selector: &Selector,
    date_selector: &Selector,
    page_url: &str,
) -> Option<LatestUploadItem> {
    let heading = card.select(title_selector).next();
    let title = selectors.title(heading.as_ref());
    let url = heading
        .as_ref()
        .and_then(|h| selectors.first_href(h))
        .map(|href| resolve_url(page_url, &href))
        .unwrap_or_default();

    if title.is_empty() || url.is_empty() {
        return None;
    }

    let year = extract_title_year(&title)
        .or_else(|| {
            card.select(date_selector)
                .next()
                .and_then(|time| time.value().attr("datetime"))
                .map(|datetime| datetime.chars().take(4).collect())
        })
        .unwrap_or_default();

    Some(LatestUploadItem {
        kind: latest_item_kind(&title, &url),
        image_url: selectors.image_url(card),
        rating: selectors.rating(card),
        year,
        title,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;

    const HOME: &str = "https://new18.ngefilm.site/";

    fn homepage(cards: &str) -> String {
        format!(
            r#"
            <html><body>
            <h3 class="homemodule-title">Film Populer</h3>
            <h3 class="homemodule-title">Upload Terbaru</h3>
            <div id="gmr-main-load">{}</div>
            </body></html>
            "#,
            cards
        )
    }

    fn card(title: &str, url: &str, extra: &str) -> String {
        format!(
            r#"<article class="item-infinite">{}<h2 class="entry-title"><a href="{}">{}</a></h2></article>"#,
            extra, url, title
        )
    }

    #[test]
    fn test_parse_latest_uploads() {
        let cards = [
            card(
                "Dune (2021)",
                "https://new18.ngefilm.site/dune-2021/",
                r#"<img data-src="https://img.site/dune.jpg"><div class="gmr-rating-item">7.9</div>"#,
            ),
            card(
                "Loki Season 2",
                "https://new18.ngefilm.site/tv/loki/",
                r#"<time class="screen-reader-text" datetime="2023-10-06T12:00:00+07:00"></time>"#,
            ),
            card("", "https://new18.ngefilm.site/empty/", ""),
        ]
        .concat();

        let items = parse_latest_uploads(&homepage(&cards), HOME).unwrap();
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].title, "Dune (2021)");
        assert_eq!(items[0].year, "2021");
        assert_eq!(items[0].rating, "7.9");
        assert_eq!(items[0].image_url, "https://img.site/dune.jpg");
        assert_eq!(items[0].kind, ItemKind::Movie);

        assert_eq!(items[1].year, "2023");
        assert_eq!(items[1].kind, ItemKind::Series);
        assert_eq!(items[1].rating, "");
    }

    #[test]
    fn test_latest_uploads_limited_to_twenty() {
        let cards: String = (1..=25)
            .map(|n| {
                card(
                    &format!("Movie {}", n),
                    &format!("https://new18.ngefilm.site/movie-{}/", n),
                    "",
                )
            })
            .collect();

        let items = parse_latest_uploads(&homepage(&cards), HOME).unwrap();
        assert_eq!(items.len(), MAX_LATEST_ITEMS);
        assert_eq!(items[19].title, "Movie 20");
        assert_eq!(items[19].year, "");
    }

    #[test]
    fn test_relative_card_links_are_resolved() {
        let cards = [
            card("Dune (2021)", "/dune-2021/", ""),
            card("Loki", "tv/loki/", ""),
        ]
        .concat();

        let items = parse_latest_uploads(&homepage(&cards), HOME).unwrap();
        assert_eq!(items[0].url, "https://new18.ngefilm.site/dune-2021/");
        assert_eq!(items[1].url, "https://new18.ngefilm.site/tv/loki/");
        assert_eq!(items[1].kind, ItemKind::Series);
    }

    #[test]
    fn test_missing_section_heading() {
        let html = r#"<div id="gmr-main-load"></div>"#;
        match parse_latest_uploads(html, HOME) {
            Err(NgefilmError::ElementNotFound(msg)) => assert!(msg.contains("Upload Terbaru")),
            other => panic!("Expected ElementNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_grid() {
        let html = r#"<h3 class="homemodule-title">Upload Terbaru</h3>"#;
        assert!(matches!(
            parse_latest_uploads(html, HOME),
            Err(NgefilmError::ElementNotFound(_))
        ));
    }
}

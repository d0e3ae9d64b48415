//! Shared fixtures for the mock-server tests

#![allow(dead_code)]

use ngefilm_core::{DelayPolicy, NgefilmScraper, ScraperConfig, SiteConfig};
use wiremock::{MockServer, Request};

/// Scraper pointed at `server` for every operation, without pauses
pub fn scraper_for(server: &MockServer) -> NgefilmScraper {
    NgefilmScraper::with_config(ScraperConfig {
        site: SiteConfig::single_host(server.uri()),
        delays: DelayPolicy::none(),
        ..ScraperConfig::default()
    })
    .expect("scraper should build")
}

/// Matches requests that carry no `player` query parameter
pub fn without_player_param(request: &Request) -> bool {
    request.url.query_pairs().all(|(key, _)| key != "player")
}

/// Player page embedding `src` the way the site lazy-loads iframes
pub fn player_page(src: &str) -> String {
    format!(
        r#"<html><body>
        <div class="gmr-embed-responsive">
            <iframe src="about:blank" data-litespeed-src="{}" allowfullscreen></iframe>
        </div>
        </body></html>"#,
        src
    )
}

/// Movie or series landing page with the given body markup
pub fn landing_page(title: &str, body: &str) -> String {
    format!(
        r#"<html><body>
        <article>
            <h1 class="entry-title">{}</h1>
            {}
        </article>
        </body></html>"#,
        title, body
    )
}

//! ngefilm web API
//!
//! Thin axum shell around [`ngefilm_core::NgefilmScraper`]:
//!
//! - `POST /api/extract` `{"url": ...}` - movie players or series episodes
//! - `POST /api/search` `{"query": ..., "type": "post" | "tv" | null}`
//! - `GET /api/latest` - homepage "Upload Terbaru" section
//!
//! Any other path is served from the static directory.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use ngefilm_core::NgefilmScraper;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub mod config;
mod error;
mod handlers;

pub use config::ServerArgs;
pub use error::ApiError;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub(crate) scraper: Arc<NgefilmScraper>,
}

impl AppState {
    pub fn new(scraper: NgefilmScraper) -> Self {
        Self {
            scraper: Arc::new(scraper),
        }
    }
}

/// Builds the application router
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/extract", post(handlers::api_extract))
        .route("/api/search", post(handlers::api_search))
        .route("/api/latest", get(handlers::api_latest))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use ngefilm_core::{DelayPolicy, ScraperConfig, SiteConfig};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_for(base_url: &str) -> Router {
        let scraper = NgefilmScraper::with_config(ScraperConfig {
            site: SiteConfig::single_host(base_url),
            delays: DelayPolicy::none(),
            ..ScraperConfig::default()
        })
        .unwrap();
        router(AppState::new(scraper), std::env::temp_dir().join("ngefilm-missing-static"))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_extract_requires_url() {
        for body in ["{}", r#"{"url": null}"#, r#"{"url": "  "}"#] {
            let (status, value) = send(app_for("http://127.0.0.1:9"), post_json("/api/extract", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(value, json!({"error": "URL is required"}));
        }
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        for body in ["{}", r#"{"type": "tv"}"#, r#"{"query": ""}"#] {
            let (status, value) = send(app_for("http://127.0.0.1:9"), post_json("/api/search", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(value, json!({"error": "Query is required"}));
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, value) = send(app_for("http://127.0.0.1:9"), post_json("/api/extract", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(value["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_search_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("s", "Inception"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<article class="item-infinite"><h2 class="entry-title"><a href="/inception-2010/">Inception (2010)</a></h2></article>"#,
            ))
            .mount(&server)
            .await;

        let (status, value) = send(
            app_for(&server.uri()),
            post_json("/api/search", r#"{"query": "Inception", "type": null}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["query"], "Inception");
        assert_eq!(value["total_results"], 1);
        assert_eq!(value["results"][0]["type"], "Movie");
    }

    #[tokio::test]
    async fn test_extract_site_failure_is_reported_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let body = json!({"url": format!("{}/missing/", server.uri())}).to_string();
        let (status, value) = send(app_for(&server.uri()), post_json("/api/extract", &body)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            value["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to extract players: HTTP 404")
        );
    }

    #[tokio::test]
    async fn test_latest_missing_section_is_reported_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let request = Request::builder()
            .uri("/api/latest")
            .body(Body::empty())
            .unwrap();
        let (status, value) = send(app_for(&server.uri()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            value["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to get latest uploads:")
        );
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let dir = std::env::temp_dir().join(format!("ngefilm-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>ngefilm</h1>").unwrap();

        let scraper = NgefilmScraper::new().unwrap();
        let app = router(AppState::new(scraper), &dir);
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>ngefilm</h1>");

        std::fs::remove_dir_all(&dir).ok();
    }
}

//! JSON API handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use ngefilm_core::{ExtractionResult, LatestUploadsResponse, SearchResponse};
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,

    /// `"post"` (movies), `"tv"` (series) or null for both
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
}

/// Returns the value when present and not blank
fn required(value: Option<String>, message: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest(message.to_string()))
}

/// `POST /api/extract`
pub async fn api_extract(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractionResult>, ApiError> {
    let Json(request) = payload?;
    let url = required(request.url, "URL is required")?;

    state
        .scraper
        .extract(&url)
        .await
        .map(Json)
        .map_err(|e| ApiError::operation("Failed to extract players", e))
}

/// `POST /api/search`
pub async fn api_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload?;
    let query = required(request.query, "Query is required")?;

    state
        .scraper
        .search(&query, request.content_type.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::operation("Search failed", e))
}

/// `GET /api/latest`
pub async fn api_latest(
    State(state): State<AppState>,
) -> Result<Json<LatestUploadsResponse>, ApiError> {
    state
        .scraper
        .latest_uploads()
        .await
        .map(Json)
        .map_err(|e| ApiError::operation("Failed to get latest uploads", e))
}

//! Error types for the ngefilm scraper
//!
//! Provides a single error enum with human-readable messages
//! and string serialization for JSON error bodies.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all ngefilm scraper operations
///
/// Implements Display for human-readable messages and Serialize
/// so it can be embedded directly in API responses.
#[derive(Error, Debug)]
pub enum NgefilmError {
    /// Network failure or timeout
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP {status} for url: {url}")]
    Status { status: u16, url: String },

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Expected HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Required input missing or empty
    #[error("{0}")]
    Validation(String),
}

impl NgefilmError {
    /// True for failures caused by the caller's input rather than the site
    pub fn is_validation(&self) -> bool {
        matches!(self, NgefilmError::Validation(_))
    }
}

impl Serialize for NgefilmError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for ngefilm operations
pub type Result<T> = std::result::Result<T, NgefilmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = NgefilmError::Status {
            status: 404,
            url: "https://new17.ngefilm.site/missing/".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "HTTP 404 for url: https://new17.ngefilm.site/missing/"
        );
    }

    #[test]
    fn test_error_display_parse_error() {
        let error = NgefilmError::ParseError("Invalid selector".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: Invalid selector");
    }

    #[test]
    fn test_error_display_element_not_found() {
        let error = NgefilmError::ElementNotFound("div#gmr-main-load".to_string());
        assert_eq!(error.to_string(), "Element not found: div#gmr-main-load");
    }

    #[test]
    fn test_error_display_invalid_url() {
        let error = NgefilmError::InvalidUrl("not-a-url".to_string());
        assert_eq!(error.to_string(), "Invalid URL: not-a-url");
    }

    #[test]
    fn test_error_display_validation() {
        let error = NgefilmError::Validation("Query is required".to_string());
        assert_eq!(error.to_string(), "Query is required");
        assert!(error.is_validation());
    }

    #[test]
    fn test_error_serialize_with_message() {
        let error = NgefilmError::ElementNotFound("Upload Terbaru".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Element not found: Upload Terbaru\"");
    }
}

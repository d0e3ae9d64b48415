//! API error responses
//!
//! Every failure leaves the server as a JSON `{"error": ...}` body.

use std::any::Any;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ngefilm_core::{ErrorResult, NgefilmError};
use tracing::{error, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or malformed input, answered with 400
    BadRequest(String),
    /// The scrape itself failed; reported with 200 like any other result
    Operation(String),
    /// Anything unexpected, answered with 500
    Internal(String),
}

impl ApiError {
    /// Wraps a scraper failure with the operation it interrupted
    pub fn operation(context: &str, error: NgefilmError) -> Self {
        if error.is_validation() {
            return ApiError::BadRequest(error.to_string());
        }
        ApiError::Operation(format!("{}: {}", context, error))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Operation(_) => StatusCode::OK,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::Operation(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(msg) => warn!(error = %msg, "rejected request"),
            ApiError::Operation(msg) => warn!(error = %msg, "operation failed"),
            ApiError::Internal(msg) => error!(error = %msg, "internal error"),
        }

        let status = self.status();
        (status, Json(ErrorResult::new(self.message()))).into_response()
    }
}

/// Turns a handler panic into a 500 JSON response
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("Server error: {}", detail)).into_response()
}

//! Error types for hello-web.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Failure to obtain greetings from the API. Both kinds are logged and
/// tolerated by the view.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or body-read failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a greeting response.
    #[error("invalid greeting response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A generated `APP_CONFIG.js` that could not be read back.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("no configuration object found in script")]
    MissingObject,

    #[error("invalid configuration object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the page handlers.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self, "page rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

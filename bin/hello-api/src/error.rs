//! Server error types.
//!
//! The greeting handler returns `Result<Json<GreetingResponse>, ServerError>`;
//! [`ServerError`] implements [`axum::response::IntoResponse`] so a failed
//! store lookup becomes the degraded HTTP 500 payload.
//!
//! **Security note:** the underlying store error is logged with full detail
//! but only the fixed `"Internal Server Error"` string reaches the caller, so
//! connection targets, SQL and driver messages never leak to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hello_common::GreetingResponse;
use thiserror::Error;
use tracing::error;

/// Any failure from the store: refused connection, query error or an empty
/// `hello` table.
#[derive(Debug, Error)]
#[error("data access error: {0}")]
pub struct DataAccessError(#[from] pub sqlx::Error);

/// All errors that can occur in the hello-api request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The greeting lookups failed. `messages` holds what the endpoint had
    /// already produced, including the degraded-mode line.
    #[error("greeting lookup failed: {source}")]
    DataAccess {
        messages: Vec<String>,
        #[source]
        source: DataAccessError,
    },
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::DataAccess { messages, source } => {
                error!(error = %source, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(GreetingResponse::degraded(messages)),
                )
                    .into_response()
            }
        }
    }
}

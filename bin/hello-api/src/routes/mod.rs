//! Axum router construction.
//!
//! [`build`] assembles the application router:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - The single `GET /api/hello` route
//!
//! The OpenAPI description is not mounted as a route; it is printed by the
//! `openapi` subcommand (see [`doc::get_docs`]).

pub mod doc;
pub mod hello;

use std::sync::Arc;

use axum::{middleware, Router};
use tower::ServiceBuilder;

use crate::middleware::{cors, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(hello::router())
        // Outermost layers execute first on the way in.
        .layer(ServiceBuilder::new().layer(cors::cors_layer(&state)))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            trace::trace_middleware,
        ))
        .with_state(state)
}

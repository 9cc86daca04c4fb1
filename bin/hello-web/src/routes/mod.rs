//! Axum router construction for the web front-end.

mod page;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete Axum [`Router`] for the web front-end.
pub fn build(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(page::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

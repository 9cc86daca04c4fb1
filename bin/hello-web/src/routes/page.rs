//! Page and client-config script.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use minijinja::context;

use crate::error::WebError;
use crate::state::AppState;
use crate::templates::INDEX_HTML;
use crate::view::GreetingView;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/APP_CONFIG.js", get(app_config_js))
}

/// Render the greeting list. Each page load builds a fresh view and makes
/// exactly one request to the API.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let mut view = GreetingView::new(&state.client_config);
    view.load(state.client.as_ref(), state.config.show_source).await;

    let html = state
        .templates
        .get_template(INDEX_HTML)?
        .render(context! { messages => view.messages() })?;
    Ok(Html(html))
}

/// The resolved client configuration as `window.APP_CONFIG`.
pub async fn app_config_js(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, WebError> {
    let script = state.client_config.to_script().render(&state.templates)?;
    Ok((
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        script,
    ))
}

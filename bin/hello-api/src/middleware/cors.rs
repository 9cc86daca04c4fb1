use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// The web front-end calls the API from another origin, so CORS is required.
pub fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<axum::http::HeaderValue> = state
        .config
        .cors_allowed_origins
        .as_deref()
        .map(|list| {
            list.split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect()
        })
        .unwrap_or_default();

    let cors = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if origins.is_empty() {
        // Wildcard; set HELLO_CORS_ORIGINS to restrict.
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

//! `GET /api/hello`.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use hello_common::GreetingResponse;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::services::GreetingRepository;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_hello), components(schemas(GreetingResponse)))]
pub struct HelloApi;

/// Register the greeting route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/hello", get(get_hello))
}

/// Greeting endpoint.
///
/// Starts with a line naming this replica, then appends the store lookups.
/// On a store failure the lines gathered so far plus a degraded-mode line are
/// returned with HTTP 500.
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "hello",
    responses(
        (status = 200, description = "Greetings from the api and the database", body = GreetingResponse),
        (status = 500, description = "Database unavailable; degraded messages", body = GreetingResponse),
    )
)]
pub async fn get_hello(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GreetingResponse>, ServerError> {
    let host = state.config.host_identity.as_str();
    let mut messages = vec![format!("Hello from api ({host})")];

    match GreetingRepository::new(state.store.as_ref(), host)
        .fetch_greetings()
        .await
    {
        Ok(greetings) => {
            messages.extend(greetings);
            Ok(Json(GreetingResponse::ok(messages)))
        }
        Err(source) => {
            messages.push(format!("DB error, check server logs from api ({host})"));
            Err(ServerError::DataAccess { messages, source })
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{Config, DbConfig};
    use crate::db::GreetingStore;
    use crate::services::greeting::test::FakeStore;

    use super::*;

    fn state_with(store: impl GreetingStore) -> Arc<AppState> {
        Arc::new(AppState {
            config: Arc::new(Config {
                bind_address: "127.0.0.1:0".into(),
                host_identity: "api-1".into(),
                db: DbConfig {
                    host: "db".into(),
                    port: 5432,
                    database: "postgres".into(),
                    user: "postgres".into(),
                    password: None,
                    acquire_timeout: crate::config::DEFAULT_ACQUIRE_TIMEOUT,
                },
                log_level: "info".into(),
                log_json: false,
                cors_allowed_origins: None,
            }),
            store: Arc::new(store),
        })
    }

    async fn call(state: Arc<AppState>, uri: &str) -> (StatusCode, Value) {
        let app = crate::routes::build(state);
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn success_returns_messages_in_call_order() {
        let (status, body) = call(state_with(FakeStore::with_greeting("hi")), "/api/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "messages": [
                    "Hello from api (api-1)",
                    "Connecting to DB (db) from api (api-1)",
                    "Connected to DB from api (api-1)",
                    "hi",
                ]
            })
        );
    }

    #[tokio::test]
    async fn refused_connection_returns_degraded_payload() {
        let (status, body) = call(state_with(FakeStore::unreachable()), "/api/hello").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "messages": [
                    "Hello from api (api-1)",
                    "DB error, check server logs from api (api-1)",
                ],
                "error": "Internal Server Error",
            })
        );
    }

    #[tokio::test]
    async fn empty_table_returns_degraded_payload() {
        let store = FakeStore {
            reachable: true,
            greeting: None,
            calls: std::sync::Mutex::new(Vec::new()),
        };
        let (status, body) = call(state_with(store), "/api/hello").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], "DB error, check server logs from api (api-1)");
    }

    #[tokio::test]
    async fn response_echoes_trace_id() {
        let app = crate::routes::build(state_with(FakeStore::with_greeting("hi")));
        let response = app
            .oneshot(Request::get("/api/hello").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key(crate::middleware::trace::X_TRACE_ID));
    }

    #[tokio::test]
    async fn other_paths_are_not_routed() {
        let (status, _) = call(state_with(FakeStore::with_greeting("hi")), "/health").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

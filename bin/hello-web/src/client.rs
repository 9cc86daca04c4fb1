//! Client for the greeting API.
//!
//! Like a browser `fetch`, a non-2xx status is not an error by itself: the
//! API's degraded 500 response still carries messages worth showing. Only a
//! transport failure or an undecodable body is reported as [`FetchError`].

use async_trait::async_trait;
use hello_common::GreetingResponse;
use tracing::debug;

use crate::app_config::ClientConfig;
use crate::error::FetchError;

#[async_trait]
pub trait GreetingClient: Send + Sync + 'static {
    /// Full URL of the greeting endpoint.
    fn endpoint(&self) -> &str;

    async fn fetch_greetings(&self) -> Result<GreetingResponse, FetchError>;
}

/// [`GreetingClient`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpGreetingClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpGreetingClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            endpoint: format!("{}/api/hello", config.api_base_url),
        })
    }
}

#[async_trait]
impl GreetingClient for HttpGreetingClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_greetings(&self) -> Result<GreetingResponse, FetchError> {
        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let greetings: GreetingResponse = serde_json::from_slice(&body)?;
        debug!(%status, count = greetings.messages.len(), "greetings fetched");
        Ok(greetings)
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });
        format!("http://{addr}")
    }

    fn client_for(base: String) -> HttpGreetingClient {
        HttpGreetingClient::new(&ClientConfig {
            api_base_url: base,
            hostname: "web-1".into(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn endpoint_appends_route_to_base_url() {
        let client = client_for("http://api:4000".into());
        assert_eq!(client.endpoint(), "http://api:4000/api/hello");
    }

    #[tokio::test]
    async fn decodes_success_body() {
        let base = spawn(Router::new().route(
            "/api/hello",
            get(|| async { Json(json!({ "messages": ["a", "b", "c"] })) }),
        ))
        .await;
        let resp = client_for(base).fetch_greetings().await.unwrap();
        assert_eq!(resp.messages, vec!["a", "b", "c"]);
        assert!(!resp.is_degraded());
    }

    #[tokio::test]
    async fn decodes_degraded_500_body() {
        let base = spawn(Router::new().route(
            "/api/hello",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "messages": ["a", "DB error"], "error": "Internal Server Error" })),
                )
            }),
        ))
        .await;
        let resp = client_for(base).fetch_greetings().await.unwrap();
        assert!(resp.is_degraded());
        assert_eq!(resp.messages.len(), 2);
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let base = spawn(Router::new().route("/api/hello", get(|| async { "<html>" }))).await;
        let err = client_for(base).fetch_greetings().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let err = client_for("http://127.0.0.1:1".into())
            .fetch_greetings()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}

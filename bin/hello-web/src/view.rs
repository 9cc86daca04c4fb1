//! The greeting list shown on the page.

use tracing::{error, warn};

use crate::app_config::ClientConfig;
use crate::client::GreetingClient;

/// Message list for one page load.
///
/// Starts with a single local greeting; [`GreetingView::load`] fetches from
/// the API once and, on success, replaces the list with the local greeting
/// followed by the API's messages. Failures leave the initial list untouched.
#[derive(Debug, Clone)]
pub struct GreetingView {
    local: String,
    messages: Vec<String>,
    fetched: bool,
}

impl GreetingView {
    pub fn new(config: &ClientConfig) -> Self {
        let local = format!("Hello from web ({})", config.hostname);
        Self {
            messages: vec![local.clone()],
            local,
            fetched: false,
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Fetch once; later calls are no-ops.
    pub async fn load(&mut self, client: &dyn GreetingClient, show_source: bool) {
        if self.fetched {
            return;
        }
        self.fetched = true;

        match client.fetch_greetings().await {
            Ok(greetings) => {
                if greetings.is_degraded() {
                    warn!(endpoint = client.endpoint(), "api answered in degraded mode");
                }
                let mut messages = Vec::with_capacity(greetings.messages.len() + 2);
                messages.push(self.local.clone());
                if show_source {
                    messages.push(format!("Fetched from {}", client.endpoint()));
                }
                messages.extend(greetings.messages);
                self.messages = messages;
            }
            Err(e) => {
                error!(endpoint = client.endpoint(), error = %e, "Error fetching data");
            }
        }
    }
}

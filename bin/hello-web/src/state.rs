//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use minijinja::Environment;

use crate::app_config::ClientConfig;
use crate::client::GreetingClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Page configuration, resolved once at startup.
    pub client_config: Arc<ClientConfig>,
    /// Client for the greeting API.
    pub client: Arc<dyn GreetingClient>,
    pub templates: Arc<Environment<'static>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("client_config", &self.client_config)
            .field("endpoint", &self.client.endpoint())
            .finish()
    }
}

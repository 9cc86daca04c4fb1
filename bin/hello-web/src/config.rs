//! Web server configuration, loaded from environment variables at startup.
//!
//! This is the server's own configuration. What the page itself needs (API
//! base URL, display hostname) is resolved separately, see
//! [`crate::app_config::ClientConfig`].

use std::path::PathBuf;

use hello_common::logging::env_flag;

/// Runtime configuration for hello-web.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind, built from `HELLO_BIND_HOST` and `PORT`
    /// (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// Generated `APP_CONFIG.js` to read the injected client configuration
    /// from (`HELLO_WEB_APP_CONFIG`, default `public/APP_CONFIG.js`).
    pub app_config_path: PathBuf,

    /// Add a "Fetched from <url>" line above the API's messages
    /// (`HELLO_WEB_SHOW_SOURCE`).
    pub show_source: bool,

    /// `tracing` filter string.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let host = env_or("HELLO_BIND_HOST", "0.0.0.0");
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);
        Self {
            bind_address: format!("{host}:{port}"),
            app_config_path: PathBuf::from(env_or("HELLO_WEB_APP_CONFIG", "public/APP_CONFIG.js")),
            show_source: env_flag("HELLO_WEB_SHOW_SOURCE"),
            log_level: env_or("HELLO_LOG", "info"),
            log_json: env_flag("HELLO_LOG_JSON"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

//! Server configuration, loaded from environment variables at startup.

use std::fmt;
use std::time::Duration;

use hello_common::host_identity;

/// Runtime configuration for hello-api.
///
/// Every field has a default so the server starts without any environment
/// variables set; in a compose file the `DB_*` values point at the database
/// service.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind, built from `HELLO_BIND_HOST` and `PORT`
    /// (default: `"0.0.0.0:4000"`).
    pub bind_address: String,

    /// Identity reported in greeting strings (`HOSTNAME`, else the OS hostname).
    pub host_identity: String,

    /// Postgres connection target and credentials.
    pub db: DbConfig,

    /// `tracing` filter string, e.g. `"info"` or `"debug,sqlx=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins; `None` allows any origin.
    pub cors_allowed_origins: Option<String>,
}

/// Default for `DB_ACQUIRE_TIMEOUT_MS`: how long a request may wait for a
/// pooled connection before the store lookup fails.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Database connection settings (`DB_HOST`, `DB_PORT`, `DB_DATABASE`,
/// `DB_USER`, `DB_PASSWORD`, `DB_ACQUIRE_TIMEOUT_MS`).
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
    pub acquire_timeout: Duration,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let host = env_or("HELLO_BIND_HOST", "0.0.0.0");
        let port: u16 = parse_env("PORT", 4000);
        Self {
            bind_address: format!("{host}:{port}"),
            host_identity: host_identity(),
            db: DbConfig {
                host: env_or("DB_HOST", "localhost"),
                port: parse_env("DB_PORT", 5432),
                database: env_or("DB_DATABASE", "postgres"),
                user: env_or("DB_USER", "postgres"),
                password: std::env::var("DB_PASSWORD").ok(),
                acquire_timeout: Duration::from_millis(parse_env(
                    "DB_ACQUIRE_TIMEOUT_MS",
                    DEFAULT_ACQUIRE_TIMEOUT.as_millis() as u64,
                )),
            },
            log_level: env_or("HELLO_LOG", "info"),
            log_json: hello_common::logging::env_flag("HELLO_LOG_JSON"),
            cors_allowed_origins: std::env::var("HELLO_CORS_ORIGINS").ok(),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

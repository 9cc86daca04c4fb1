//! Client configuration resolution.
//!
//! The page needs two values: the API base URL and the hostname to greet
//! with. Each is taken from the first source that defines it (non-empty):
//!
//! 1. the injected `window.APP_CONFIG` object from the generated
//!    `APP_CONFIG.js` script;
//! 2. the `HELLO_WEB_*` environment namespace;
//! 3. a local-development default.
//!
//! Resolution never fails and does no network I/O. The result is built once
//! at startup and handed to handlers through [`crate::state::AppState`].

use std::collections::HashMap;
use std::path::Path;

use minijinja::{context, Environment};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ScriptError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_HOSTNAME: &str = hello_common::host::UNKNOWN_HOST;

/// Prefix of the environment namespace consulted after the injected object.
pub const ENV_PREFIX: &str = "HELLO_WEB_";

/// The object assigned to `window.APP_CONFIG` by the generated script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigScript {
    #[serde(default)]
    pub server_hostname: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl AppConfigScript {
    /// Values for a freshly generated script: this host's identity and
    /// `API_BASEURL` (empty when unset, so the page falls back further).
    pub fn from_env() -> Self {
        Self {
            server_hostname: Some(hello_common::host_identity()),
            api_base_url: Some(std::env::var("API_BASEURL").unwrap_or_default()),
        }
    }

    /// Extract the object literal from a `window.APP_CONFIG = {...}` script.
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let assignment = script
            .rfind("APP_CONFIG")
            .and_then(|at| script[at..].find('=').map(|eq| at + eq))
            .unwrap_or(0);
        let start = script[assignment..]
            .find('{')
            .map(|i| assignment + i)
            .ok_or(ScriptError::MissingObject)?;
        let end = script.rfind('}').ok_or(ScriptError::MissingObject)?;
        if end < start {
            return Err(ScriptError::MissingObject);
        }
        Ok(serde_json::from_str(&script[start..=end])?)
    }

    /// Read and parse the script at `path`.
    ///
    /// A missing file is normal in local development and logged at `debug`;
    /// an unreadable or malformed one is logged at `warn`. Both yield `None`.
    pub fn load(path: &Path) -> Option<Self> {
        let script = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no injected client config");
                return None;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read client config script");
                return None;
            }
        };
        match Self::parse(&script) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed client config script");
                None
            }
        }
    }

    /// Render as a browser script.
    pub fn render(&self, templates: &Environment<'_>) -> Result<String, minijinja::Error> {
        templates
            .get_template(crate::templates::APP_CONFIG_JS)?
            .render(context! { config => self })
    }
}

/// Snapshot of the `HELLO_WEB_*` variables, keyed without the prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvNamespace {
    vars: HashMap<String, String>,
}

impl EnvNamespace {
    /// Non-UTF-8 variables are skipped rather than aborting resolution.
    pub fn from_process_env() -> Option<Self> {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// `None` when no variable carries the prefix.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Option<Self> {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter_map(|(k, v)| k.strip_prefix(ENV_PREFIX).map(|k| (k.to_owned(), v)))
            .collect();
        (!vars.is_empty()).then_some(Self { vars })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Resolved page configuration; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub hostname: String,
}

impl ClientConfig {
    pub fn resolve(injected: Option<&AppConfigScript>, env: Option<&EnvNamespace>) -> Self {
        let api_base_url = first_defined([
            injected.and_then(|s| s.api_base_url.as_deref()),
            env.and_then(|e| e.get("API_BASEURL")),
        ])
        .unwrap_or(DEFAULT_API_BASE_URL);

        let hostname = first_defined([
            injected.and_then(|s| s.server_hostname.as_deref()),
            env.and_then(|e| e.get("HOSTNAME")),
        ])
        .unwrap_or(DEFAULT_HOSTNAME);

        Self {
            api_base_url: api_base_url.to_owned(),
            hostname: hostname.to_owned(),
        }
    }

    /// The resolved values in the shape served as `/APP_CONFIG.js`.
    pub fn to_script(&self) -> AppConfigScript {
        AppConfigScript {
            server_hostname: Some(self.hostname.clone()),
            api_base_url: Some(self.api_base_url.clone()),
        }
    }
}

fn first_defined<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|v| !v.is_empty())
}

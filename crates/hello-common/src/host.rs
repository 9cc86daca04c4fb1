//! Host identity used in greeting strings.
//!
//! Containers get their hostname injected as `HOSTNAME`; outside a container
//! we fall back to the OS hostname and finally to a fixed placeholder.

use sysinfo::System;

/// Placeholder used when no host identity can be determined.
pub const UNKNOWN_HOST: &str = "unknown-host";

/// Resolve this process's host identity.
pub fn host_identity() -> String {
    from_sources(std::env::var("HOSTNAME").ok(), System::host_name())
}

fn from_sources(env: Option<String>, os: Option<String>) -> String {
    env.filter(|v| !v.is_empty())
        .or_else(|| os.filter(|v| !v.is_empty()))
        .unwrap_or_else(|| UNKNOWN_HOST.to_owned())
}

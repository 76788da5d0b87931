//! API base-URL resolution.
//!
//! Produces the root address prepended to relative API paths, read from two
//! recognized environment variables (a primary name and a legacy alias),
//! normalized and falling back to a built-in default when nothing usable is
//! set. Resolution is total: every environment maps to a non-empty URL with
//! no trailing slash.

mod resolve;
mod sanitize;

pub use resolve::{
    resolve_base_url, resolve_with_source, BaseUrlSource, EnvOverrides, ALIAS_ENV_VAR,
    PRIMARY_ENV_VAR,
};
pub use sanitize::sanitize_base_url;

use std::sync::OnceLock;

/// Fallback base URL used when no override variable is set or every
/// candidate is blank after normalization.
pub const DEFAULT_API_BASE_URL: &str = "http://172.235.33.181:8000";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Process-wide API base URL, resolved from the environment on first use
/// and immutable afterwards.
///
/// Guaranteed non-empty with no trailing slash.
pub fn api_base_url() -> &'static str {
    API_BASE_URL.get_or_init(|| resolve_base_url(&EnvOverrides::from_process_env()))
}

/// Scheme and authority (`host[:port]`) of an absolute base URL, for
/// diagnostics. Returns `None` when the value is not an absolute URL
/// (e.g. a relative prefix like `/api` behind a reverse proxy).
pub fn authority_of(base: &str) -> Option<(String, String)> {
    let parsed = url::Url::parse(base).ok()?;
    let host = parsed.host_str()?.to_string();
    let authority = match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    };
    Some((parsed.scheme().to_string(), authority))
}

//! Environment snapshot and resolution order.

use super::{sanitize_base_url, DEFAULT_API_BASE_URL};

/// Primary override variable for the API base URL.
pub const PRIMARY_ENV_VAR: &str = "HEALTHBOARD_API_BASE_URL";
/// Legacy alias, consulted only when the primary variable is unset.
pub const ALIAS_ENV_VAR: &str = "HEALTHBOARD_API_URL";

/// Snapshot of the recognized override variables.
///
/// Resolution is a pure function of a snapshot, so tests can exercise every
/// combination without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub primary: Option<String>,
    pub alias: Option<String>,
}

impl EnvOverrides {
    /// Capture the override variables from the process environment.
    pub fn from_process_env() -> Self {
        Self {
            primary: std::env::var(PRIMARY_ENV_VAR).ok(),
            alias: std::env::var(ALIAS_ENV_VAR).ok(),
        }
    }

    /// The winning candidate: primary if set (even when blank), else alias,
    /// else empty. A set-but-blank primary deliberately shadows the alias.
    fn candidate(&self) -> &str {
        self.primary
            .as_deref()
            .or(self.alias.as_deref())
            .unwrap_or("")
    }
}

/// Which source supplied the resolved base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    /// The primary override variable.
    Primary,
    /// The legacy alias variable.
    Alias,
    /// The built-in default literal.
    Default,
}

/// Resolve the base URL from an environment snapshot.
///
/// The candidate (primary, else alias, else empty) is trimmed; a blank
/// candidate falls back to [`DEFAULT_API_BASE_URL`]. The result is then
/// normalized by [`sanitize_base_url`], which strips trailing slashes and
/// substitutes the default again if stripping empties the string.
pub fn resolve_base_url(env: &EnvOverrides) -> String {
    let trimmed = env.candidate().trim();
    if trimmed.is_empty() {
        sanitize_base_url(DEFAULT_API_BASE_URL)
    } else {
        sanitize_base_url(trimmed)
    }
}

/// Like [`resolve_base_url`], but also reports which source won.
///
/// The default counts as the source whenever the override normalizes to
/// nothing usable (blank, whitespace, or slashes only).
pub fn resolve_with_source(env: &EnvOverrides) -> (String, BaseUrlSource) {
    let resolved = resolve_base_url(env);
    let usable = !env.candidate().trim().trim_end_matches('/').is_empty();
    let source = if !usable {
        BaseUrlSource::Default
    } else if env.primary.is_some() {
        BaseUrlSource::Primary
    } else {
        BaseUrlSource::Alias
    };
    (resolved, source)
}

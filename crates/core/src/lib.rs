//! UserSearch core — the fetch-validate-render cycle behind the user search page.
//!
//! # Modules
//!
//! - [`types`] — Search criteria, column schemas, records, result sets, form outcomes
//! - [`panel`] — The five search forms and profile navigation
//! - [`client`] — HTTP transport for the user API
//! - [`session`] — Cross-page session state and navigation
//! - [`table`] — Plain-text table rendering
//! - [`error`] — Validation, API, and config errors

pub mod client;
pub mod error;
pub mod panel;
pub mod session;
pub mod table;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

pub use client::{HttpTransport, Transport};
pub use error::{ApiError, ConfigError, ValidationError};
pub use panel::SearchPanel;
pub use session::{Navigator, SessionState};
pub use types::*;

pub const DEFAULT_API_URL: &str = "http://api:4000";
pub const DEFAULT_PROFILE_PAGE: &str = "view_profile";

/// Environment variable that overrides `api_url`.
pub const API_URL_ENV: &str = "USERSEARCH_API_URL";

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `~/.usersearch` on Unix, `%APPDATA%/usersearch` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("usersearch"))
    } else {
        home_dir().map(|h| h.join(".usersearch"))
    }
}

// ---------------------------------------------------------------------------
// .usersearch.toml config loading
// ---------------------------------------------------------------------------

/// Runtime configuration for the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Base address of the user API.
    pub api_url: String,
    /// Page the view-profile form navigates to.
    pub profile_page: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            profile_page: DEFAULT_PROFILE_PAGE.to_string(),
        }
    }
}

/// Known keys in `.usersearch.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["api_url", "profile_page"];

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Closest known key within edit distance 3.
fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .copied()
        .min_by_key(|k| edit_distance(key, k))
        .filter(|k| edit_distance(key, k) <= 3)
}

/// Parse config text. Unknown keys are warned about, not rejected.
pub fn parse_config(content: &str, path: &str) -> Result<PanelConfig, ConfigError> {
    let table = content
        .parse::<toml::Table>()
        .map_err(|e| ConfigError::Parse { path: path.to_string(), message: e.to_string() })?;

    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        match suggest_key(key) {
            Some(suggestion) => {
                warn!(key = key.as_str(), suggestion, "Unknown key in {path}, did you mean `{suggestion}`?")
            }
            None => warn!(key = key.as_str(), "Unknown key in {path}"),
        }
    }

    let mut config = PanelConfig::default();
    if let Some(v) = string_key(&table, "api_url")? {
        config.api_url = v;
    }
    if let Some(v) = string_key(&table, "profile_page")? {
        config.profile_page = v;
    }
    Ok(config)
}

fn string_key(table: &toml::Table, key: &str) -> Result<Option<String>, ConfigError> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ConfigError::WrongType { key: key.to_string() }),
    }
}

/// Read and parse one config file.
pub fn read_config_file(path: &Path) -> Result<PanelConfig, ConfigError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: display.clone(), source })?;
    parse_config(&content, &display)
}

/// Candidate config files, most specific first.
pub fn config_candidates(project_root: &Path) -> Vec<PathBuf> {
    let mut out = vec![project_root.join(".usersearch.toml")];
    if let Some(dir) = config_dir() {
        out.push(dir.join("config.toml"));
    }
    out
}

/// Load config from the first existing candidate, then apply the
/// `USERSEARCH_API_URL` override. Broken files fall back to defaults with a warning.
pub fn load_config(project_root: &Path) -> PanelConfig {
    let mut config = PanelConfig::default();

    if let Some(path) = config_candidates(project_root).into_iter().find(|p| p.exists()) {
        debug!(path = %path.display(), "Loading config");
        match read_config_file(&path) {
            Ok(c) => {
                info!(path = %path.display(), api_url = c.api_url.as_str(), "Loaded config");
                config = c;
            }
            Err(e) => warn!("{e}; using defaults"),
        }
    }

    apply_env_override(&mut config, std::env::var(API_URL_ENV).ok());
    config
}

fn apply_env_override(config: &mut PanelConfig, api_url: Option<String>) {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        debug!(api_url = url.as_str(), "{API_URL_ENV} override");
        config.api_url = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("api_url", "api_url"), 0);
        assert_eq!(edit_distance("apiurl", "api_url"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_suggest_key() {
        assert_eq!(suggest_key("api_ur"), Some("api_url"));
        assert_eq!(suggest_key("profile_pgae"), Some("profile_page"));
        assert_eq!(suggest_key("completely_different"), None);
    }

    #[test]
    fn test_parse_config_defaults_and_overrides() {
        let c = parse_config("", "test").unwrap();
        assert_eq!(c, PanelConfig::default());

        let c = parse_config("api_url = \"http://localhost:4000\"\nextra = 1\n", "test").unwrap();
        assert_eq!(c.api_url, "http://localhost:4000");
        assert_eq!(c.profile_page, DEFAULT_PROFILE_PAGE);
    }

    #[test]
    fn test_parse_config_errors() {
        assert!(matches!(parse_config("api_url = 5", "t"), Err(ConfigError::WrongType { .. })));
        assert!(matches!(parse_config("api_url = ", "t"), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_env_override() {
        let mut c = PanelConfig::default();
        apply_env_override(&mut c, Some("  ".into()));
        assert_eq!(c.api_url, DEFAULT_API_URL);
        apply_env_override(&mut c, Some("http://other:1".into()));
        assert_eq!(c.api_url, "http://other:1");
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".usersearch.toml");
        std::fs::write(&path, "profile_page = \"profile\"\n").unwrap();
        let c = read_config_file(&path).unwrap();
        assert_eq!(c.profile_page, "profile");

        let missing = dir.path().join("nope.toml");
        assert!(matches!(read_config_file(&missing), Err(ConfigError::Read { .. })));
    }
}

//! Settings and query input loading.
//!
//! Settings come from an optional JSON (or YAML) file merged over built-in
//! defaults; the scraper runs with defaults when the file is missing or
//! broken. Query input files are stricter: a malformed input file is a
//! fatal configuration error.
//!
//! # Query input file
//!
//! ```json
//! {
//!   "queries": [
//!     { "query": "openai board", "region": "us-en", "max_articles": 5, "hours_back": 48 }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Runtime settings, every field defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub default_query: String,
    pub region: Option<String>,
    pub language: Option<String>,
    pub max_articles: usize,
    /// Freshness window in hours; `None` or zero keeps everything.
    pub hours_back: Option<u64>,
    /// Per-request timeout in seconds.
    pub request_timeout: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_query: "artificial intelligence".to_string(),
            region: Some("us-en".to_string()),
            language: Some("en".to_string()),
            max_articles: 10,
            hours_back: Some(24),
            request_timeout: 10,
            user_agent: "AdvancedNewsScraper/1.0 (+https://bitbash.dev)".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as
    /// JSON. Keys missing from the file keep their default values.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            warn!("Settings file not found, using built-in defaults");
            return Self::default();
        }

        match Self::read(path) {
            Ok(settings) => {
                info!("Loaded settings");
                settings
            }
            Err(e) => {
                error!(error = %e, "Failed to load settings, using built-in defaults");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Ok(serde_yaml::from_str(&raw)?)
        } else {
            Ok(serde_json::from_str(&raw)?)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// One entry of a query input file. Unset fields inherit from [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuerySpec {
    pub query: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub max_articles: Option<usize>,
    #[serde(default)]
    pub hours_back: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct QueryFile {
    queries: Option<serde_json::Value>,
}

/// A query with every option resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub query: String,
    pub region: Option<String>,
    pub language: Option<String>,
    pub max_articles: usize,
    pub hours_back: Option<u64>,
}

impl QuerySpec {
    /// Fill unset fields from `settings`.
    pub fn resolve(self, settings: &Settings) -> ResolvedQuery {
        ResolvedQuery {
            query: self.query,
            region: self.region.or_else(|| settings.region.clone()),
            language: self.language.or_else(|| settings.language.clone()),
            max_articles: self.max_articles.unwrap_or(settings.max_articles),
            hours_back: self.hours_back.or(settings.hours_back),
        }
    }
}

/// Parse the contents of a query input file.
///
/// # Errors
///
/// Returns [`Error::Config`] if `queries` is missing or not an array, or if
/// an entry is not an object with a `query` field.
pub fn parse_query_file(raw: &str) -> Result<Vec<QuerySpec>> {
    let file: QueryFile = serde_json::from_str(raw)?;
    let Some(serde_json::Value::Array(entries)) = file.queries else {
        return Err(Error::Config(
            "Input file must contain a 'queries' array.".to_string(),
        ));
    };

    entries
        .into_iter()
        .map(|entry| {
            let has_query = entry.as_object().is_some_and(|o| o.contains_key("query"));
            if !has_query {
                return Err(Error::Config(
                    "Each entry in 'queries' must be an object with at least a 'query' field."
                        .to_string(),
                ));
            }
            Ok(serde_json::from_value(entry)?)
        })
        .collect()
}

/// Read and parse a query input file from disk.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_query_file(path: &Path) -> Result<Vec<QuerySpec>> {
    let raw = std::fs::read_to_string(path)?;
    let queries = parse_query_file(&raw)?;
    info!(count = queries.len(), "Loaded query input file");
    Ok(queries)
}

//! Command-line interface definitions for News Digest.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the News Digest application.
///
/// # Examples
///
/// ```sh
/// # Single query, JSON to stdout
/// news_digest -q "openai board"
///
/// # Several queries from a file, written to disk
/// news_digest -i queries.json -o out/records.json
///
/// # Last six hours only, at most five articles
/// news_digest -q "rust language" -m 5 --since-hours 6
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search query text (ignored if --input is provided)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Path to a JSON file containing an array of query definitions
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to write JSON output (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of articles to fetch per query
    #[arg(short, long)]
    pub max_articles: Option<usize>,

    /// Only keep articles published within the last N hours (best-effort)
    #[arg(long)]
    pub since_hours: Option<u64>,

    /// Path to the settings file (JSON, or YAML by extension)
    #[arg(short, long, env = "NEWS_DIGEST_CONFIG", default_value = "config/settings.json")]
    pub config: PathBuf,

    /// Logging level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

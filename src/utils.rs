//! Utility functions for string handling and file system operations.
//!
//! This module provides helper functions used throughout the application:
//! - Whitespace normalization for text pulled out of HTML
//! - Character-safe truncation for titles and log output
//! - Parent directory creation for output files

use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

/// Collapse every run of whitespace into a single space and trim the ends.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim `s` and return it, or `None` if nothing is left.
pub fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Keep at most the first `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and a count of
/// the dropped characters appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 chars)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let total = s.chars().count();
    if total <= max {
        s.to_string()
    } else {
        format!("{}…(+{} chars)", truncate_chars(s, max), total - max)
    }
}

/// Create the parent directory of `path` if it does not exist yet.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory cannot be created.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).await?;
            debug!(parent = %parent.display(), "Ensured output directory exists");
            Ok(())
        }
        _ => Ok(()),
    }
}

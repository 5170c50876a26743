//! JSON output of article records.
//!
//! Records are written as a single JSON array, either to a file or to
//! stdout. Logging goes to stderr, so stdout output stays valid JSON.

use crate::error::Result;
use crate::models::ArticleRecord;
use crate::utils::ensure_parent_dir;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize `records` as a JSON array, two-space indented when `pretty`.
pub fn to_json(records: &[ArticleRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Write `records` to `output_path`, or print them to stdout when no path is given.
///
/// Missing parent directories of `output_path` are created.
#[instrument(level = "info", skip(records), fields(count = records.len()))]
pub async fn write_json(
    records: &[ArticleRecord],
    output_path: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let payload = to_json(records, pretty)?;

    match output_path {
        Some(path) => {
            ensure_parent_dir(path).await?;
            fs::write(path, payload).await?;
            info!(count = records.len(), path = %path.display(), "Wrote records");
        }
        None => println!("{payload}"),
    }
    Ok(())
}

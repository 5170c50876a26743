//! Error types for the outer pipeline.
//!
//! Extraction and summarization never fail; these errors come from the
//! network, the file system, and user-supplied configuration.

use thiserror::Error;

/// Failure to load a page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to fetch {url:?} after {retries} retries: {last}")]
    RetriesExhausted {
        url: String,
        retries: usize,
        last: Box<FetchError>,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

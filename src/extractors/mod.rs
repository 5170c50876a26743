//! HTML content extraction.
//!
//! # Submodules
//!
//! - [`metadata`]: Title, author, canonical URL and other fields from meta tags
//! - [`body`]: The main article text
//! - [`article`]: Fetches a page and assembles both into a [`ParsedArticle`](crate::models::ParsedArticle)
//!
//! Extraction is best-effort: sparse or malformed pages produce empty fields,
//! never errors.

pub mod article;
pub mod body;
pub mod metadata;

pub use article::parse_article;
pub use body::extract_body_text;
pub use metadata::extract_metadata;

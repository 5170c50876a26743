//! Data models for fetched articles and the records emitted for them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleMetadata`]: Best-effort metadata pulled from an article's markup
//! - [`CrawlInfo`]: What the fetcher observed while loading the page
//! - [`ParsedArticle`]: An article after extraction, before summarization
//! - [`SummaryResult`]: The extractive relevance summary of an article
//! - [`ArticleRecord`]: The final output record written to JSON
//!
//! The serialized field names are camelCase to match the output schema, and
//! field declaration order is the serialized key order.

use serde::{Deserialize, Serialize};

/// Structured metadata extracted from an article page.
///
/// Every field except `canonical_url` is optional; extraction never fails,
/// it just leaves fields empty. Absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadata {
    /// The canonical URL, falling back to the URL that was requested.
    pub canonical_url: Option<String>,
    /// The page title as declared by its metadata.
    pub title: Option<String>,
    /// A short description of the article.
    pub description: Option<String>,
    /// The lead image URL.
    pub image: Option<String>,
    /// The publishing site or publisher name.
    pub source: Option<String>,
    /// The article's author.
    pub author: Option<String>,
    /// Raw keywords string, verbatim from the page.
    pub keywords: Option<String>,
    /// Raw publication timestamp, unparsed.
    pub published: Option<String>,
    /// The document language code from `<html lang>`.
    pub language_code: Option<String>,
}

/// Details about how an article page was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlInfo {
    /// The URL the page was finally loaded from, after redirects.
    pub loaded_url: String,
    /// ISO-8601 UTC timestamp of when the page was loaded.
    pub loaded_time: String,
    /// The HTTP status code of the final response.
    pub http_status_code: u16,
}

/// An article after metadata and body text extraction.
///
/// `title` is the display title: the metadata title, else the start of the
/// body text, else the requested URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArticle {
    pub url: String,
    pub crawl: CrawlInfo,
    pub metadata: ArticleMetadata,
    pub title: String,
    pub text: String,
}

/// An extractive summary of an article against a search query.
///
/// `summary` is a Markdown bullet list of the selected sentences, or empty
/// when the article had no usable text. `score` is always within `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SummaryResult {
    pub title: String,
    pub summary: String,
    pub score: u8,
}

/// The final record emitted for one article.
///
/// # JSON Schema
///
/// ```text
/// { url, crawl, aiSummary, metadata, title, text }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// The URL as returned by the search step.
    pub url: String,
    pub crawl: CrawlInfo,
    pub ai_summary: SummaryResult,
    pub metadata: ArticleMetadata,
    /// The display title.
    pub title: String,
    /// The extracted body text.
    pub text: String,
}

//! Search-result discovery.
//!
//! A search scraper turns a query into a list of candidate article URLs.
//! Article pages themselves are loaded and parsed by
//! [`extractors::parse_article`](crate::extractors::parse_article).
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | DuckDuckGo | [`duckduckgo`] | HTML scraping | JavaScript-free results page, no API key |
//!
//! Failed searches are logged and produce an empty list rather than
//! aborting the batch.

pub mod duckduckgo;

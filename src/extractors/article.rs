//! Article loading and assembly.
//!
//! Fetches an article page, runs the metadata and body extractors over it,
//! and assembles a [`ParsedArticle`] with a resolved display title.

use crate::error::FetchError;
use crate::extractors::{extract_body_text, extract_metadata};
use crate::fetch::{Fetch, FetchResponse};
use crate::models::{ArticleMetadata, CrawlInfo, ParsedArticle};
use crate::utils::{truncate_chars, truncate_for_log};
use chrono::{SecondsFormat, Utc};
use scraper::Html;
use tracing::{debug, info, instrument};

/// Characters of the body's first line used as a fallback title.
const TITLE_CHARS: usize = 120;

/// Fetch and parse a news article.
///
/// # Errors
///
/// Only fetch failures are errors; any page that loads yields an article,
/// however sparse.
#[instrument(level = "info", skip(fetcher))]
pub async fn parse_article<F: Fetch>(fetcher: &F, url: &str) -> Result<ParsedArticle, FetchError> {
    info!("Fetching article");
    let response = fetcher.fetch(url).await?;
    let loaded_time = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    let article = assemble_article(url, &response, loaded_time);
    debug!(
        metadata = ?article.metadata,
        text = %truncate_for_log(&article.text, 200),
        "Parsed article"
    );
    Ok(article)
}

/// Build a [`ParsedArticle`] from an already loaded page.
pub fn assemble_article(url: &str, response: &FetchResponse, loaded_time: String) -> ParsedArticle {
    let document = Html::parse_document(&response.body);
    let metadata = extract_metadata(&document, url);
    let text = extract_body_text(&document);
    let title = display_title(&metadata, &text, url);

    ParsedArticle {
        url: url.to_string(),
        crawl: CrawlInfo {
            loaded_url: response.final_url.clone(),
            loaded_time,
            http_status_code: response.status_code,
        },
        metadata,
        title,
        text,
    }
}

/// Resolve the display title: the metadata title, else the start of the
/// body's first line, else the requested URL.
pub fn display_title(metadata: &ArticleMetadata, text: &str, url: &str) -> String {
    if let Some(title) = metadata.title.as_deref().filter(|t| !t.is_empty()) {
        return title.to_string();
    }

    let first_line = text.split('\n').next().unwrap_or_default();
    if first_line.is_empty() {
        url.to_string()
    } else {
        truncate_chars(first_line, TITLE_CHARS)
    }
}

//! # News Digest
//!
//! Searches the web for news articles matching a query, extracts each
//! article's metadata and body text, summarizes it against the query, and
//! writes normalized JSON records.
//!
//! ## Usage
//!
//! ```sh
//! news_digest -q "openai board" -o ./out/records.json
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture, per query:
//! 1. **Search**: Discover candidate article URLs on DuckDuckGo
//! 2. **Fetching**: Download each article page (with retry and backoff)
//! 3. **Extraction**: Pull metadata and body text out of the HTML
//! 4. **Summarization**: Pick the sentences most relevant to the query
//! 5. **Output**: Filter by freshness and write one JSON array of records
//!
//! Articles that fail to load are logged and skipped; the batch continues.

use chrono::Utc;
use clap::Parser;
use futures::stream::{self, StreamExt};
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod extractors;
mod fetch;
mod freshness;
mod models;
mod outputs;
mod scrapers;
mod summarizer;
mod utils;

use cli::Cli;
use config::{QuerySpec, ResolvedQuery, Settings, load_query_file};
use extractors::parse_article;
use fetch::{Fetch, HttpFetcher, RetryFetch};
use freshness::filter_by_freshness;
use models::ArticleRecord;
use outputs::{json, record::build_article_record};
use scrapers::duckduckgo::search_news;
use summarizer::{DEFAULT_MAX_SENTENCES, summarize};

/// Retries after the first failed request.
const MAX_RETRIES: usize = 3;
/// First backoff delay; doubles on each retry.
const BASE_DELAY_MS: u64 = 500;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.to_lowercase()));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("news_digest starting up");
    debug!(?args, "Parsed CLI arguments");

    if let Err(e) = run(&args).await {
        error!(error = %e, "Fatal error running scraper");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, secs = elapsed.as_secs(), "Execution complete");
    Ok(())
}

async fn run(args: &Cli) -> Result<(), Box<dyn Error>> {
    let settings = Settings::load(&args.config);

    let http = HttpFetcher::new(settings.timeout(), &settings.user_agent)?;
    let fetcher = RetryFetch::new(
        http,
        MAX_RETRIES,
        std::time::Duration::from_millis(BASE_DELAY_MS),
    );

    let queries = resolve_queries(args, &settings)?;

    let mut all_records = Vec::new();
    for query in &queries {
        let records = process_query(&fetcher, query).await;
        all_records.extend(records);
    }

    info!(count = all_records.len(), "Collected article records");
    json::write_json(&all_records, args.output.as_deref(), !args.compact).await?;
    Ok(())
}

/// Work out which queries to run: the input file if given, else the single
/// CLI query (or the configured default).
fn resolve_queries(args: &Cli, settings: &Settings) -> Result<Vec<ResolvedQuery>, error::Error> {
    if let Some(path) = &args.input {
        let specs = load_query_file(path)?;
        return Ok(specs.into_iter().map(|s| s.resolve(settings)).collect());
    }

    let query = args
        .query
        .clone()
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| settings.default_query.clone());
    if query.is_empty() {
        return Err(error::Error::Config(
            "No query provided and no default_query configured.".to_string(),
        ));
    }

    let spec = QuerySpec {
        query,
        region: None,
        language: None,
        max_articles: args.max_articles,
        hours_back: args.since_hours,
    };
    Ok(vec![spec.resolve(settings)])
}

/// Search, fetch, extract, and summarize every article for one query.
#[instrument(level = "info", skip_all, fields(query = %query.query))]
async fn process_query<F: Fetch>(fetcher: &F, query: &ResolvedQuery) -> Vec<ArticleRecord> {
    info!(
        region = ?query.region,
        language = ?query.language,
        max_articles = query.max_articles,
        hours_back = ?query.hours_back,
        "Processing query"
    );

    let urls = search_news(
        fetcher,
        &query.query,
        query.max_articles,
        query.region.as_deref(),
    )
    .await;

    // One article at a time; a failure only drops that article.
    let records: Vec<ArticleRecord> = stream::iter(urls)
        .then(|url: String| async move {
            match parse_article(fetcher, &url).await {
                Ok(article) => {
                    let ai_summary = summarize(
                        &article.text,
                        &query.query,
                        Some(&article.title),
                        DEFAULT_MAX_SENTENCES,
                    );
                    debug!(%url, score = ai_summary.score, "Summarized article");
                    Some(build_article_record(article, ai_summary))
                }
                Err(e) => {
                    warn!(%url, error = %e, "Skipping URL due to request error");
                    None
                }
            }
        })
        .filter_map(std::future::ready)
        .collect()
        .await;

    filter_by_freshness(records, query.hours_back, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::tests::StubFetcher;

    const ARTICLE_PAGE: &str = r#"<html lang="en"><head>
        <title>Transit budget approved</title>
        <meta property="article:published_time" content="2000-01-01T00:00:00Z">
        </head><body><article>
        <p>The council approved the transit budget after a long and heated debate.</p>
        <p>Bus riders will see more frequent service on weekends starting in June.</p>
        </article></body></html>"#;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("news_digest").chain(args.iter().copied()))
    }

    #[test]
    fn test_resolve_cli_query() {
        let queries = resolve_queries(&cli(&["-q", "transit", "-m", "4"]), &Settings::default()).unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].query, "transit");
        assert_eq!(queries[0].max_articles, 4);
        assert_eq!(queries[0].hours_back, Some(24));
        assert_eq!(queries[0].region.as_deref(), Some("us-en"));
    }

    #[test]
    fn test_resolve_default_query() {
        let queries = resolve_queries(&cli(&[]), &Settings::default()).unwrap();
        assert_eq!(queries[0].query, "artificial intelligence");
        assert_eq!(queries[0].max_articles, 10);
    }

    #[test]
    fn test_resolve_requires_some_query() {
        let settings = Settings {
            default_query: String::new(),
            ..Settings::default()
        };
        assert!(resolve_queries(&cli(&[]), &settings).is_err());
    }

    #[tokio::test]
    async fn test_process_query_without_results() {
        let fetcher = StubFetcher::new(ARTICLE_PAGE);
        let query = ResolvedQuery {
            query: "transit budget".to_string(),
            region: None,
            language: None,
            max_articles: 5,
            hours_back: None,
        };

        // the served page has no links, so the search finds nothing
        assert!(process_query(&fetcher, &query).await.is_empty());
    }

    #[tokio::test]
    async fn test_process_query_end_to_end() {
        let search_page = r#"<a class="result__a" href="https://news.example.com/transit">Transit</a>"#;
        let fetcher = RoutedFetcher {
            search: StubFetcher::new(search_page),
            article: StubFetcher::new(ARTICLE_PAGE),
        };
        let query = ResolvedQuery {
            query: "transit budget".to_string(),
            region: Some("us-en".to_string()),
            language: None,
            max_articles: 5,
            hours_back: None,
        };

        let records = process_query(&fetcher, &query).await;
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.url, "https://news.example.com/transit");
        assert_eq!(record.title, "Transit budget approved");
        assert_eq!(record.ai_summary.title, "Transit budget approved");
        assert!(record.ai_summary.summary.starts_with("- The council approved"));
        assert!((50..=100).contains(&record.ai_summary.score));

        // a freshness window drops the year-2000 article
        let stale = ResolvedQuery {
            hours_back: Some(24),
            ..query
        };
        assert!(process_query(&fetcher, &stale).await.is_empty());
    }

    struct RoutedFetcher {
        search: StubFetcher,
        article: StubFetcher,
    }

    impl Fetch for RoutedFetcher {
        async fn fetch(&self, url: &str) -> Result<fetch::FetchResponse, error::FetchError> {
            if url.starts_with(scrapers::duckduckgo::SEARCH_URL) {
                self.search.fetch(url).await
            } else {
                self.article.fetch(url).await
            }
        }
    }
}

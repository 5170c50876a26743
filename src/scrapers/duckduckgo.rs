//! DuckDuckGo HTML search for candidate article URLs.
//!
//! Uses the JavaScript-free results page at `https://duckduckgo.com/html/`,
//! which needs no API key.
//!
//! # Result links
//!
//! Result anchors carry the `result__a` class. Their `href` is either the
//! target URL itself or a DuckDuckGo redirect of the form
//! `//duckduckgo.com/l/?uddg=<encoded target>`, which is unwrapped here.

use crate::fetch::Fetch;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, error, info, instrument};
use url::Url;

pub const SEARCH_URL: &str = "https://duckduckgo.com/html/";

static RESULT_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a.result__a").unwrap());
static ANY_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Build the search URL for `query`, optionally scoped to a region such as `us-en`.
pub fn search_url(query: &str, region: Option<&str>) -> String {
    let mut url = format!("{SEARCH_URL}?q={}", urlencoding::encode(query));
    if let Some(region) = region.filter(|r| !r.is_empty()) {
        url.push_str("&kl=");
        url.push_str(&urlencoding::encode(region));
    }
    url
}

/// Search DuckDuckGo and return up to `max_articles` result URLs.
///
/// A failed search is logged and yields no URLs.
#[instrument(level = "info", skip(fetcher))]
pub async fn search_news<F: Fetch>(
    fetcher: &F,
    query: &str,
    max_articles: usize,
    region: Option<&str>,
) -> Vec<String> {
    info!("Searching DuckDuckGo");

    let response = match fetcher.fetch(&search_url(query, region)).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "Search request failed");
            return Vec::new();
        }
    };

    let urls = extract_result_urls(&response.body, max_articles);
    info!(count = urls.len(), "Found candidate article URLs");
    debug!(urls = ?urls, "Search result URLs");
    urls
}

/// Pull article URLs out of a DuckDuckGo results page.
///
/// Falls back to every absolute link on the page when no result anchors are
/// found. Duplicates are dropped, first occurrence kept.
pub fn extract_result_urls(html: &str, max: usize) -> Vec<String> {
    let document = Html::parse_document(html);

    let results: Vec<String> = document
        .select(&RESULT_LINK)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(resolve_result_href)
        .unique()
        .take(max)
        .collect();
    if !results.is_empty() {
        return results;
    }

    document
        .select(&ANY_LINK)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.starts_with("http"))
        .map(str::to_string)
        .unique()
        .take(max)
        .collect()
}

/// Turn a result `href` into an absolute article URL.
fn resolve_result_href(href: &str) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }

    let base = Url::parse(SEARCH_URL).ok()?;
    let resolved = base.join(href).ok()?;
    if resolved.path() != "/l/" {
        return None;
    }
    resolved
        .query_pairs()
        .find(|(key, _)| key == "uddg")
        .map(|(_, target)| target.into_owned())
        .filter(|target| target.starts_with("http"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::tests::StubFetcher;

    const RESULTS_PAGE: &str = r#"
        <html><body>
          <div class="result">
            <a class="result__a" href="https://news.example.com/one">One</a>
          </div>
          <div class="result">
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fnews.example.org%2Ftwo%3Fa%3D1&amp;rut=abc">Two</a>
          </div>
          <div class="result">
            <a class="result__a" href="https://news.example.com/one">One again</a>
          </div>
          <div class="result">
            <a class="result__a" href="/settings">Settings</a>
          </div>
          <div class="result">
            <a class="result__a" href="https://news.example.net/three">Three</a>
          </div>
          <a href="https://elsewhere.example/ignored">Footer</a>
        </body></html>"#;

    #[test]
    fn test_search_url() {
        assert_eq!(
            search_url("openai board & women", Some("us-en")),
            "https://duckduckgo.com/html/?q=openai%20board%20%26%20women&kl=us-en"
        );
        assert_eq!(search_url("rust", None), "https://duckduckgo.com/html/?q=rust");
        assert_eq!(search_url("rust", Some("")), "https://duckduckgo.com/html/?q=rust");
    }

    #[test]
    fn test_extract_result_urls() {
        let urls = extract_result_urls(RESULTS_PAGE, 10);
        assert_eq!(
            urls,
            vec![
                "https://news.example.com/one",
                "https://news.example.org/two?a=1",
                "https://news.example.net/three",
            ]
        );
    }

    #[test]
    fn test_extract_result_urls_respects_max() {
        assert_eq!(extract_result_urls(RESULTS_PAGE, 2).len(), 2);
        assert!(extract_result_urls(RESULTS_PAGE, 0).is_empty());
    }

    #[test]
    fn test_fallback_to_absolute_links() {
        let html = r#"<a href="/local">x</a><a href="https://a.example/1">a</a>
                      <a href="http://b.example/2">b</a><a href="https://a.example/1">dup</a>"#;
        assert_eq!(
            extract_result_urls(html, 10),
            vec!["https://a.example/1", "http://b.example/2"]
        );
    }

    #[tokio::test]
    async fn test_search_news_uses_fetcher() {
        let fetcher = StubFetcher::new(RESULTS_PAGE);
        let urls = search_news(&fetcher, "news", 1, Some("us-en")).await;
        assert_eq!(urls, vec!["https://news.example.com/one"]);
    }

    #[tokio::test]
    async fn test_search_failure_yields_nothing() {
        let fetcher = StubFetcher::failing(1);
        assert!(search_news(&fetcher, "news", 5, None).await.is_empty());
    }
}

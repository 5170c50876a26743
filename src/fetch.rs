//! HTTP page fetching with exponential backoff retry logic.
//!
//! # Architecture
//!
//! The module uses a trait-based design for flexibility:
//! - [`Fetch`]: Core trait defining an async page load
//! - [`HttpFetcher`]: `reqwest`-backed implementation
//! - [`RetryFetch`]: Decorator that adds retry logic to any `Fetch` implementation
//!
//! # Retry Strategy
//!
//! - 3 retries after the first attempt by default
//! - Exponential backoff starting at 500 milliseconds
//! - Maximum delay capped at 30 seconds
//! - Random jitter (0-250ms) added to each delay

use crate::error::FetchError;
use rand::{Rng, rng};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::fmt;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, error, instrument, warn};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// A successfully loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// The URL the body was served from, after redirects.
    pub final_url: String,
    pub status_code: u16,
    pub body: String,
}

/// Trait for async page loading.
///
/// This abstraction allows the search and article steps to run against the
/// network, a retrying decorator, or a canned response in tests.
pub trait Fetch {
    /// Load `url`, following redirects.
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// Plain HTTP fetcher. Any status outside `200..400` is an error.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher sending `user_agent` and an HTML `Accept` header.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self.client.get(url).send().await?;
        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();

        if !(200..400).contains(&status_code) {
            warn!(status = status_code, url = %final_url, "Received non-success status code");
            return Err(FetchError::Status {
                status: status_code,
                url: final_url,
            });
        }

        let body = response.text().await?;
        debug!(status = status_code, bytes = body.len(), "Fetched page");
        Ok(FetchResponse {
            final_url,
            status_code,
            body,
        })
    }
}

/// Wrapper that adds exponential backoff retry logic to any [`Fetch`] implementation.
///
/// # Backoff Strategy
///
/// The delay between retries follows this formula:
/// ```text
/// delay = min(base_delay * 2^(attempt-1), max_delay) + random_jitter(0..max_jitter)
/// ```
pub struct RetryFetch<T> {
    /// The underlying fetcher to wrap.
    inner: T,
    /// Retries allowed after the first attempt.
    max_retries: usize,
    /// Initial delay between retries (doubles with each attempt).
    base_delay: Duration,
    /// Maximum delay cap to prevent excessive waiting.
    max_delay: Duration,
    /// Upper bound of the random jitter added to each delay.
    max_jitter: Duration,
}

impl<T> RetryFetch<T>
where
    T: Fetch,
{
    /// Create a new retry wrapper around an existing [`Fetch`] implementation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let http = HttpFetcher::new(Duration::from_secs(10), "agent/1.0")?;
    /// let fetcher = RetryFetch::new(http, 3, Duration::from_millis(500));
    /// ```
    pub fn new(inner: T, max_retries: usize, base_delay: Duration) -> Self {
        Self {
            inner,
            max_retries,
            base_delay,
            max_delay: Duration::from_secs(30),
            max_jitter: Duration::from_millis(250),
        }
    }

    pub fn with_max_jitter(mut self, max_jitter: Duration) -> Self {
        self.max_jitter = max_jitter;
        self
    }

    fn backoff(&self, attempt: usize) -> Duration {
        let factor = 1u32.checked_shl((attempt - 1) as u32).unwrap_or(u32::MAX);
        let delay = self.base_delay.saturating_mul(factor).min(self.max_delay);
        let jitter_ms: u64 = rng().random_range(0..=self.max_jitter.as_millis() as u64);
        delay + Duration::from_millis(jitter_ms)
    }
}

impl<T> fmt::Debug for RetryFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryFetch")
            .field("max_retries", &self.max_retries)
            .field("base_delay", &self.base_delay)
            .field("max_delay", &self.max_delay)
            .field("max_jitter", &self.max_jitter)
            .finish()
    }
}

impl<T> Fetch for RetryFetch<T>
where
    T: Fetch,
{
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let total_t0 = Instant::now();
        let mut attempt = 0usize;

        loop {
            match self.inner.fetch(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    attempt += 1;
                    let total_dt = total_t0.elapsed();

                    if attempt > self.max_retries {
                        error!(
                            attempt,
                            max = self.max_retries,
                            elapsed_ms_total = total_dt.as_millis(),
                            error = %e,
                            "fetch exhausted retries"
                        );
                        return Err(FetchError::RetriesExhausted {
                            url: url.to_string(),
                            retries: self.max_retries,
                            last: Box::new(e),
                        });
                    }

                    let delay = self.backoff(attempt);
                    warn!(
                        attempt,
                        max = self.max_retries,
                        elapsed_ms_total = total_dt.as_millis(),
                        ?delay,
                        error = %e,
                        "fetch attempt failed; backing off"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}

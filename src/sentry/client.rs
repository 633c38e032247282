//! Sentry HTTP client: the request executor used by every traversal

use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::api;
use crate::error::{DiscoveryError, Result};

use super::rate_limit::RequestPacer;
use super::retry::{parse_retry_after, tokio_sleep, RetryPolicy, SleepFn};
use super::traits::Listing;

/// Tunables for a [`SentryClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout
    pub timeout: Duration,
    /// Retry budget for transient failures and 429 handling
    pub retry: RetryPolicy,
    /// Minimum spacing between attempts
    pub min_request_interval: Duration,
    /// Sub-fetches in flight per resource list
    pub concurrency: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(api::DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
            min_request_interval: Duration::from_millis(api::MIN_REQUEST_INTERVAL_MS),
            concurrency: api::DEFAULT_CONCURRENCY,
        }
    }
}

/// Transport failures that are worth another attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransientFailure {
    Timeout,
    Connection,
}

impl TransientFailure {
    fn classify(err: &reqwest::Error) -> Option<Self> {
        // A connect timeout reports both; it counts as a timeout.
        if err.is_timeout() {
            Some(TransientFailure::Timeout)
        } else if err.is_connect() || err.is_body() || err.is_decode() {
            Some(TransientFailure::Connection)
        } else {
            None
        }
    }

    fn exhausted(self, attempts: u32) -> DiscoveryError {
        match self {
            TransientFailure::Timeout => DiscoveryError::Timeout { attempts },
            TransientFailure::Connection => DiscoveryError::Connection { attempts },
        }
    }
}

/// Status, `Retry-After` and body of one completed attempt
struct AttemptResponse {
    status: u16,
    retry_after: Option<String>,
    body: String,
}

impl fmt::Display for TransientFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransientFailure::Timeout => write!(f, "Request timeout"),
            TransientFailure::Connection => write!(f, "Connection error"),
        }
    }
}

/// Sentry API client
///
/// Owns the pooled HTTP connection for one discovery run. Dropping the client
/// closes the pool.
pub struct SentryClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
    pacer: RequestPacer,
    sleep: SleepFn,
    concurrency: usize,
}

impl SentryClient {
    /// Create a client with default options
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        Self::with_options(token, base_url, ClientOptions::default())
    }

    /// Create a client with explicit options
    pub fn with_options(token: &str, base_url: &str, options: ClientOptions) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            DiscoveryError::Config(
                "Auth token contains characters that are not valid in an HTTP header".to_string(),
            )
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(api::USER_AGENT)
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(options.timeout)
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_string();
        debug!("Initialized Sentry client with base_url: {}", base_url);

        Ok(Self {
            client,
            base_url,
            retry: options.retry,
            pacer: RequestPacer::new(options.min_request_interval),
            sleep: tokio_sleep(),
            concurrency: options.concurrency.max(1),
        })
    }

    /// Replace the sleep used for pacing, backoff and Retry-After waits
    pub fn with_sleeper(mut self, sleep: SleepFn) -> Self {
        self.sleep = sleep;
        self
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path and query
    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw)
            .map_err(|e| DiscoveryError::Config(format!("Invalid request URL '{}': {}", raw, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Issue an authenticated GET and classify the outcome.
    ///
    /// - 200 (and any other 2xx) returns the parsed body
    /// - 204 and 404 return an empty object
    /// - 429 waits for `Retry-After` and repeats the attempt without
    ///   consuming a retry
    /// - 401/403 fail immediately with [`DiscoveryError::Authentication`]
    /// - timeouts and connection failures, including ones hit while reading
    ///   the body, are retried with exponential backoff
    pub async fn execute(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = self.url(path, query)?;
        let mut attempt: u32 = 0;
        let mut rate_limit_waits: u32 = 0;

        loop {
            self.pacer.wait(&self.sleep).await;
            debug!("Making request to {} (attempt {})", url, attempt + 1);

            let outcome = self.attempt(&url).await;
            self.pacer.mark().await;

            let response = match outcome {
                Ok(response) => response,
                Err(err) => match TransientFailure::classify(&err) {
                    Some(failure) if self.retry.can_retry(attempt) => {
                        let wait = RetryPolicy::backoff(attempt);
                        warn!("{}, retrying in {} seconds", failure, wait.as_secs());
                        (self.sleep)(wait).await;
                        attempt += 1;
                        continue;
                    }
                    Some(failure) => return Err(failure.exhausted(attempt + 1)),
                    None => return Err(DiscoveryError::Http(err)),
                },
            };

            let AttemptResponse {
                status,
                retry_after,
                body,
            } = response;
            match status {
                204 => return Ok(empty_object()),
                404 => {
                    warn!("Resource not found: {}", url);
                    return Ok(empty_object());
                }
                200..=299 => {
                    if body.trim().is_empty() {
                        return Ok(empty_object());
                    }
                    return Ok(serde_json::from_str(&body)?);
                }
                429 => {
                    if self.retry.rate_limit_exhausted(rate_limit_waits) {
                        return Err(DiscoveryError::RateLimited {
                            waits: rate_limit_waits,
                        });
                    }
                    rate_limit_waits += 1;
                    let retry_after = parse_retry_after(retry_after.as_deref());
                    warn!("Rate limited, waiting {} seconds", retry_after.as_secs());
                    (self.sleep)(retry_after).await;
                }
                401 | 403 => return Err(DiscoveryError::Authentication { status, body }),
                _ => return Err(DiscoveryError::Api { status, body }),
            }
        }
    }

    /// One request/response exchange. A successful body is read in full here
    /// so that a stalled or dropped body counts against the same attempt.
    async fn attempt(&self, url: &Url) -> std::result::Result<AttemptResponse, reqwest::Error> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = match status {
            204 | 404 | 429 => String::new(),
            200..=299 => response.text().await?,
            // Error bodies are diagnostics only
            _ => response.text().await.unwrap_or_default(),
        };

        Ok(AttemptResponse {
            status,
            retry_after,
            body,
        })
    }

    /// GET an endpoint that should return a JSON list
    pub async fn execute_list(&self, path: &str) -> Result<Listing> {
        Ok(Listing::from(self.execute(path, &[]).await?))
    }

    /// Run `fetch` for every item with at most `concurrency` calls in flight.
    ///
    /// Results keep the input order regardless of completion order; the first
    /// error aborts the remaining fetches.
    pub(crate) async fn fetch_ordered<I, T, F, Fut>(
        &self,
        items: Vec<I>,
        fetch: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(I) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        stream::iter(items.into_iter().map(fetch))
            .buffered(self.concurrency)
            .try_collect()
            .await
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

#[cfg(test)]
impl SentryClient {
    /// Create a test client against a mock server: no pacing, no real sleeps
    pub fn test_client(base_url: &str) -> Self {
        Self::test_client_with(base_url, ClientOptions::default()).0
    }

    /// Test client with custom options; returns the recorded waits
    pub fn test_client_with(
        base_url: &str,
        options: ClientOptions,
    ) -> (Self, std::sync::Arc<std::sync::Mutex<Vec<Duration>>>) {
        let options = ClientOptions {
            min_request_interval: Duration::ZERO,
            ..options
        };
        let (sleep, waits) = super::retry::testing::recording_sleep();
        let client = Self::with_options("test-token", base_url, options)
            .unwrap()
            .with_sleeper(sleep);
        (client, waits)
    }
}

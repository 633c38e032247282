//! Retry and backoff policy for transient request failures

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::config::api;

/// Async sleep used for pacing, backoff and Retry-After waits.
///
/// The client never calls `tokio::time::sleep` directly so that waits can be
/// observed (and skipped) in tests.
pub type SleepFn = Arc<dyn Fn(Duration) -> BoxFuture<'static, ()> + Send + Sync>;

/// Sleep on the tokio timer
pub fn tokio_sleep() -> SleepFn {
    Arc::new(|duration: Duration| -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    })
}

/// Retry budget for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt for timeouts and connection errors
    pub retry_attempts: u32,
    /// Ceiling on 429 waits within one request; `None` keeps waiting as long
    /// as the server keeps answering 429
    pub max_rate_limit_waits: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry_attempts: api::DEFAULT_RETRY_ATTEMPTS,
            max_rate_limit_waits: None,
        }
    }
}

impl RetryPolicy {
    /// Exponential backoff before retrying after `attempt` (0-based): 2^attempt seconds
    pub fn backoff(attempt: u32) -> Duration {
        Duration::from_secs(2u64.saturating_pow(attempt))
    }

    /// Whether a transient failure on `attempt` (0-based) may be retried
    pub fn can_retry(&self, attempt: u32) -> bool {
        attempt < self.retry_attempts
    }

    /// Whether another 429 wait would exceed the ceiling
    pub fn rate_limit_exhausted(&self, waits: u32) -> bool {
        matches!(self.max_rate_limit_waits, Some(max) if waits >= max)
    }
}

/// Parse a `Retry-After` header value given in seconds
///
/// Missing or non-numeric values fall back to the default wait.
pub fn parse_retry_after(value: Option<&str>) -> Duration {
    let seconds = value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(api::DEFAULT_RETRY_AFTER_SECS);
    Duration::from_secs(seconds)
}

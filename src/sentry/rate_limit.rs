//! Minimum-interval request pacing
//!
//! Every attempt made by one client waits until a fixed interval has passed
//! since the previous attempt. The last-request timestamp is held behind an
//! async mutex across the wait, so concurrent sub-fetches are paced as one
//! stream of requests.

use std::time::{Duration, Instant};

use log::debug;
use tokio::sync::Mutex;

use super::retry::SleepFn;

/// Paces requests so that consecutive attempts are at least `min_interval` apart
pub struct RequestPacer {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RequestPacer {
    /// Create a pacer with the given minimum interval
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Configured minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Time still to wait before the next attempt may start
    fn remaining(&self, last: Option<Instant>, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(last?);
        (elapsed < self.min_interval).then(|| self.min_interval - elapsed)
    }

    /// Wait until the interval since the previous attempt has elapsed, then
    /// claim the slot for the caller.
    pub async fn wait(&self, sleep: &SleepFn) {
        let mut last = self.last_request.lock().await;
        if let Some(remaining) = self.remaining(*last, Instant::now()) {
            debug!("Pacing request, waiting {:?}", remaining);
            sleep(remaining).await;
        }
        *last = Some(Instant::now());
    }

    /// Record that an attempt just finished, successful or not
    pub async fn mark(&self) {
        let now = Instant::now();
        let mut last = self.last_request.lock().await;
        *last = Some(last.map_or(now, |previous| previous.max(now)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentry::retry::testing::recording_sleep;

    #[tokio::test]
    async fn test_first_request_does_not_wait() {
        let pacer = RequestPacer::new(Duration::from_millis(100));
        let (sleep, waits) = recording_sleep();

        pacer.wait(&sleep).await;

        assert!(waits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_back_to_back_requests_wait_for_remainder() {
        let pacer = RequestPacer::new(Duration::from_millis(100));
        let (sleep, waits) = recording_sleep();

        pacer.wait(&sleep).await;
        pacer.mark().await;
        pacer.wait(&sleep).await;

        let waits = waits.lock().unwrap();
        assert_eq!(waits.len(), 1);
        assert!(waits[0] > Duration::ZERO);
        assert!(waits[0] <= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_no_wait_once_interval_elapsed() {
        let pacer = RequestPacer::new(Duration::from_millis(20));
        let (sleep, waits) = recording_sleep();

        pacer.wait(&sleep).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        pacer.wait(&sleep).await;

        assert!(waits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_zero_interval_never_waits() {
        let pacer = RequestPacer::new(Duration::ZERO);
        let (sleep, waits) = recording_sleep();

        for _ in 0..5 {
            pacer.wait(&sleep).await;
            pacer.mark().await;
        }

        assert!(waits.lock().unwrap().is_empty());
        assert_eq!(pacer.min_interval(), Duration::ZERO);
    }

    #[test]
    fn test_remaining_without_previous_request() {
        let pacer = RequestPacer::new(Duration::from_millis(100));
        assert!(pacer.remaining(None, Instant::now()).is_none());
    }
}

//! Retry with jittered exponential backoff
//!
//! The first failure of a call is followed by up to `max_retries` further
//! attempts. Before retry `n` (1-based) the caller sleeps
//! `delay * (0.9 + 0.2 * n / max_retries)`, after which `delay` doubles.

use std::future::Future;
use std::time::Duration;

use log::warn;
use tokio::time::sleep;

/// Bounded retry schedule for API calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts allowed after the first failure
    pub max_retries: u32,
    /// Base delay before the first retry
    pub initial_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
        }
    }

    /// Total attempts including the first one
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Sleep before retry number `retry` (1-based) given the current base delay
    pub fn backoff(&self, retry: u32, delay: Duration) -> Duration {
        let progress = if self.max_retries == 0 {
            0.0
        } else {
            f64::from(retry) / f64::from(self.max_retries)
        };
        // Saturate instead of panicking when the scaled delay overflows
        Duration::try_from_secs_f64(delay.as_secs_f64() * (0.9 + 0.2 * progress))
            .unwrap_or(Duration::MAX)
    }

    /// Every sleep the policy would perform, in order
    pub fn schedule(&self) -> Vec<Duration> {
        let mut delay = self.initial_delay;
        (1..=self.max_retries)
            .map(|retry| {
                let wait = self.backoff(retry, delay);
                delay = delay.saturating_mul(2);
                wait
            })
            .collect()
    }

    /// Run `operation` until it succeeds, fails terminally, or the budget is spent.
    ///
    /// The error of the last attempt is returned unchanged.
    pub async fn run<T, E, F, Fut, P>(&self, mut operation: F, is_retryable: P) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: std::fmt::Display,
    {
        let mut delay = self.initial_delay;
        let mut retry = 0;

        loop {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if retry >= self.max_retries || !is_retryable(&err) {
                return Err(err);
            }
            retry += 1;

            let wait = self.backoff(retry, delay);
            warn!(
                "Attempt {}/{} failed: {}. Retrying in {:?}",
                retry,
                self.max_attempts(),
                err,
                wait
            );
            sleep(wait).await;
            delay = delay.saturating_mul(2);
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_MAX_RETRIES,
            crate::config::DEFAULT_RETRY_DELAY,
        )
    }
}

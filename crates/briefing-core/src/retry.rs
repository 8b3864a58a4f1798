//! Bounded retry with exponential backoff.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

/// Retry policy for fallible async operations.
///
/// An operation is attempted up to `max_retries + 1` times. The sleep before
/// attempt `k + 1` is `initial_delay * backoff_multiplier^(k - 1)`. The policy
/// holds no state across calls.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(2),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_delay: Duration, backoff_multiplier: f64) -> Self {
        Self {
            max_retries,
            initial_delay,
            backoff_multiplier,
        }
    }

    /// Run `op`, retrying every error.
    pub async fn run<T, E, F, Fut>(&self, op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.run_with(op, |_| true, |_, _| {}).await
    }

    /// Run `op`, retrying only errors for which `retryable` returns true.
    ///
    /// `on_retry` is invoked with the error and the 1-indexed attempt number
    /// before each sleep. It is a side-channel for logging and metrics and
    /// never affects control flow. On exhaustion the error from the final
    /// attempt is returned unchanged; a non-retryable error is returned on
    /// first occurrence without sleeping.
    pub async fn run_with<T, E, F, Fut, Q, O>(
        &self,
        mut op: F,
        mut retryable: Q,
        mut on_retry: O,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        Q: FnMut(&E) -> bool,
        O: FnMut(&E, u32),
        E: Display,
    {
        let mut delay = self.initial_delay;
        let mut attempt = 0u32;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if !retryable(&err) {
                        return Err(err);
                    }
                    attempt += 1;
                    if attempt > self.max_retries {
                        error!(
                            "giving up after {} attempts: {}",
                            self.max_retries + 1,
                            err
                        );
                        return Err(err);
                    }
                    warn!(
                        "attempt {}/{} failed: {}; retrying in {:.1}s",
                        attempt,
                        self.max_retries,
                        err,
                        delay.as_secs_f64()
                    );
                    on_retry(&err, attempt);
                    tokio::time::sleep(delay).await;
                    delay = delay.mul_f64(self.backoff_multiplier);
                }
            }
        }
    }
}

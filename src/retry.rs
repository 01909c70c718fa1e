use std::{fmt, time::Duration};

use async_trait::async_trait;

use crate::ClientOptions;

/// Wait applied to a 429 response that carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Attempt budget and backoff base for one logical request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, always at least one.
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Backoff applied after the 1-based `attempt` failed:
    /// `base_delay * 2^(attempt - 1)`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(16);
        let base = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let millis = base.saturating_mul(1u64 << exp);
        Duration::from_millis(millis)
    }

    pub(crate) fn has_attempts_left(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&ClientOptions::default())
    }
}

impl From<&ClientOptions> for RetryPolicy {
    fn from(options: &ClientOptions) -> Self {
        Self::new(
            options.retry_attempts,
            Duration::from_millis(options.retry_delay_ms),
        )
    }
}

/// Reads the first `Retry-After` value as whole seconds.
///
/// Missing or non-numeric values fall back to [`DEFAULT_RETRY_AFTER_SECS`].
pub(crate) fn parse_retry_after(value: Option<&str>) -> u64 {
    value
        .and_then(|raw| raw.split(',').next())
        .and_then(|first| first.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Performs the waits between attempts.
///
/// Swap the implementation to observe or skip delays in tests.
#[async_trait]
pub trait Sleeper: fmt::Debug + Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Default sleeper backed by `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

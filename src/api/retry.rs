//! Bounded retry with jittered exponential backoff.
//!
//! Only transport failures on idempotent requests are retried; an HTTP error
//! status always goes straight back to the caller.

use std::time::Duration;

use rand::Rng;
use reqwest::Method;

use crate::api::error::ApiError;
use crate::config::ApiConfig;

const MAX_BACKOFF: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff_base: Duration::ZERO,
        }
    }

    /// Whether a failed attempt number `attempt` (0-based) should be repeated.
    pub fn should_retry(&self, method: &Method, error: &ApiError, attempt: u32) -> bool {
        attempt < self.max_retries && is_idempotent(method) && error.is_transient()
    }

    /// Upper bound of the sleep before retry `attempt + 1`.
    pub fn backoff_cap(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.backoff_base.saturating_mul(factor).min(MAX_BACKOFF)
    }

    /// Full jitter: uniform in `0..=backoff_cap(attempt)`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let cap_ms = self.backoff_cap(attempt).as_millis() as u64;
        if cap_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::rng().random_range(0..=cap_ms))
    }
}

impl From<&ApiConfig> for RetryPolicy {
    fn from(config: &ApiConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff_base: Duration::from_millis(config.retry_backoff_base_ms),
        }
    }
}

fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::PUT | Method::DELETE
    )
}

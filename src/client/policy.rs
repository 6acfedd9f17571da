use crate::error::ErrorRecord;
use std::time::Duration;

/// Decision after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Retry { delay: Duration },
    Fail,
}

/// Bounded exponential backoff.
///
/// The delay before attempt `n + 1` is `min(base_delay * 2^n, max_delay)`, where `n` is the
/// number of attempts that have failed so far. With the defaults that gives 2000 ms, then
/// 4000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(5000),
        }
    }
}

impl RetryPolicy {
    /// A single attempt, no retry.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub fn backoff_delay(&self, failed_attempts: u32) -> Duration {
        let base = self.base_delay.as_millis() as u64;
        let factor = 1u64.checked_shl(failed_attempts).unwrap_or(u64::MAX);
        let delay = base.saturating_mul(factor).min(self.max_delay.as_millis() as u64);
        Duration::from_millis(delay)
    }

    /// `failed_attempts` is 1-based: the first failure passes 1.
    pub(crate) fn decide(&self, err: &ErrorRecord, failed_attempts: u32) -> Decision {
        if err.retryable && failed_attempts < self.max_attempts.max(1) {
            Decision::Retry {
                delay: self.backoff_delay(failed_attempts),
            }
        } else {
            Decision::Fail
        }
    }
}

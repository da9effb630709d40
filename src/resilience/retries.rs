//! Retry policy and the delivery state machine.
//!
//! # State Transitions
//! ```text
//! Attempting(n) → Delivered:       attempt n got a 2xx
//! Attempting(n) → Attempting(n+1): attempt n failed, n < max (sleep n * unit)
//! Attempting(n) → Failed(last):    attempt n failed, n == max (Transition::Failed)
//! ```
//!
//! `Failed` has no `DeliveryState` variant: a spent budget leaves the machine
//! through `Transition::Failed`, which carries the last failure.
//!
//! Transport failures and non-2xx responses are retried identically.

use std::time::Duration;

use crate::resilience::backoff::linear_backoff;

/// Bounded retry policy with linear backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Always at least 1.
    pub max_attempts: u32,

    /// Backoff unit; retry after attempt `n` waits `n * backoff_unit`.
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            backoff_unit: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff_unit: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_unit,
        }
    }

    /// Delay before the next attempt after `attempt` failed, or `None` when
    /// the budget is spent.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt < self.max_attempts {
            Some(linear_backoff(attempt, self.backoff_unit))
        } else {
            None
        }
    }
}

/// Progress of a single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryState {
    /// Attempt `n` (1-based) is about to run.
    Attempting(u32),
    Delivered { attempts: u32 },
}

/// Outcome of a failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<F> {
    /// Wait `delay`, then continue in `next`.
    Retry { delay: Duration, next: DeliveryState },
    /// Terminal: the budget is spent and `last` is the final failure.
    Failed { attempts: u32, last: F },
}

impl DeliveryState {
    pub fn start() -> Self {
        Self::Attempting(1)
    }

    /// Current attempt number, or the attempt count once delivered.
    pub fn attempt(&self) -> u32 {
        match self {
            Self::Attempting(n) => *n,
            Self::Delivered { attempts } => *attempts,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    pub fn on_success(self) -> Self {
        Self::Delivered {
            attempts: self.attempt(),
        }
    }

    pub fn on_failure<F>(self, policy: &RetryPolicy, failure: F) -> Transition<F> {
        let attempt = self.attempt();
        match policy.delay_after(attempt) {
            Some(delay) => Transition::Retry {
                delay,
                next: Self::Attempting(attempt + 1),
            },
            None => Transition::Failed {
                attempts: attempt,
                last: failure,
            },
        }
    }
}

//! Linear backoff between delivery attempts.

use std::future::Future;
use std::time::Duration;

/// Delay to wait after the given failed attempt (1-based).
///
/// Attempt `n` waits `n * unit`; attempt 0 waits nothing.
pub fn linear_backoff(attempt: u32, unit: Duration) -> Duration {
    unit.saturating_mul(attempt)
}

/// Something that can wait out a backoff delay.
///
/// Production code sleeps on the Tokio timer; tests substitute an
/// implementation that records the requested delays.
pub trait Pause {
    fn pause(&self, delay: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the Tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPause;

impl Pause for TokioPause {
    fn pause(&self, delay: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(delay)
    }
}

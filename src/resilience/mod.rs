//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Delivery attempt fails (transport error or non-2xx):
//!     → retries.rs (state machine: retry or give up)
//!     → backoff.rs (linear delay, waited out through `Pause`)
//!     → next attempt
//! ```
//!
//! # Notes
//! - Every attempt is bounded by the HTTP client timeout (see http/client.rs)
//! - Backoff is linear in the attempt number, no jitter

pub mod backoff;
pub mod retries;

pub use backoff::{linear_backoff, Pause, TokioPause};
pub use retries::{DeliveryState, RetryPolicy, Transition};

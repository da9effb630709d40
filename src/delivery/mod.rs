//! Result delivery subsystem.
//!
//! # Data Flow
//! ```text
//! HashSet<MutualPair> + regNo
//!     → payload.rs (ResultPayload, serialized once)
//!     → client.rs (POST to webhook, Authorization: <token>)
//!     → resilience/ (retry decision + linear backoff)
//!     → DeliveryReceipt or DeliveryError::Exhausted
//! ```

pub mod client;
pub mod payload;
pub mod types;

pub use client::WebhookClient;
pub use payload::ResultPayload;
pub use types::{AttemptFailure, DeliveryError, DeliveryReceipt, DeliveryResult};

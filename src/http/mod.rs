//! Outbound HTTP plumbing.
//!
//! # Data Flow
//! ```text
//! RelayConfig (request timeout)
//!     → client.rs (one reqwest::Client for the whole run)
//!     → source/ and delivery/ issue requests
//!     → response.rs (best-effort body capture, log snippets)
//! ```

pub mod client;
pub mod response;

pub use client::build_client;
pub use response::{read_body_lossy, snippet};

//! Mutual-follow relay library.
//!
//! Fetches a follow graph, finds users who follow each other and delivers
//! the pairs to a webhook with bounded, linearly backed-off retries.

pub mod config;
pub mod delivery;
pub mod graph;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod source;

pub use config::RelayConfig;
pub use graph::{find_mutual_pairs, MutualPair};
pub use lifecycle::run_job;

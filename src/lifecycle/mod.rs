//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs: load config → validate → init logging
//!     → job.rs: source → graph → delivery
//!     → exit 0 on delivery, 1 on any error
//! ```
//!
//! # Notes
//! - Fail fast: configuration and fetch errors are fatal
//! - Steps run strictly in order; nothing is spawned

pub mod job;

pub use job::{run_job, JobError, JobReport};

//! Dataset source subsystem.
//!
//! # Data Flow
//! ```text
//! IdentityConfig
//!     → client.rs (POST {name, regNo, email})
//!     → types.rs (InitialResponse → Assignment, required-field checks)
//!     → graph/ (users) and delivery/ (webhook, token)
//! ```

pub mod client;
pub mod types;

pub use client::SourceClient;
pub use types::{Assignment, InitialRequest, InitialResponse, SourceError, SourceResult};

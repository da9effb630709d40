//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → RELAY_* environment variables (loader.rs)
//!     → command-line flags (main.rs)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//! ```
//!
//! # Notes
//! - Every section has defaults except the caller identity
//! - Validation reports all problems, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ensure_valid, load_config, ConfigError};
pub use schema::{DeliveryConfig, IdentityConfig, ObservabilityConfig, RelayConfig, SourceConfig};
pub use validation::ValidationError;

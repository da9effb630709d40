//! Observability subsystem.
//!
//! Every subsystem logs through `tracing` with structured fields (attempt,
//! status, delay, body snippet). `logging.rs` installs the subscriber.

pub mod logging;

pub use logging::init_logging;

//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the job.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::resilience::RetryPolicy;

/// Default dataset endpoint.
pub const DEFAULT_SOURCE_URL: &str = "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook";

/// Root configuration for the relay job.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Caller identity sent to the dataset endpoint.
    pub identity: IdentityConfig,

    /// Dataset endpoint settings.
    pub source: SourceConfig,

    /// Webhook delivery and retry settings.
    pub delivery: DeliveryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl RelayConfig {
    /// Retry policy for webhook delivery.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.delivery.max_attempts,
            Duration::from_millis(self.delivery.backoff_unit_ms),
        )
    }

    /// Per-attempt HTTP timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.delivery.request_timeout_secs)
    }
}

/// Caller identity. No defaults: every field must be supplied.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IdentityConfig {
    /// Display name.
    pub name: String,

    /// Registration number; also tags the delivered result.
    pub reg_no: String,

    /// Contact email.
    pub email: String,
}

/// Dataset endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL the identity is posted to.
    pub url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

/// Delivery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Total delivery attempts, including the first.
    pub max_attempts: u32,

    /// Linear backoff unit in milliseconds.
    pub backoff_unit_ms: u64,

    /// Timeout for each individual HTTP request in seconds.
    pub request_timeout_secs: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            backoff_unit_ms: 1000,
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

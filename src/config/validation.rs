//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Every problem is
//! collected rather than stopping at the first one.

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("identity.{0} must not be empty")]
    MissingIdentity(&'static str),

    #[error("identity.email '{0}' is not an email address")]
    InvalidEmail(String),

    #[error("source.url '{url}' is invalid: {reason}")]
    InvalidSourceUrl { url: String, reason: String },

    #[error("delivery.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("delivery.request_timeout_secs must be greater than 0")]
    ZeroTimeout,
}

/// Check a loaded configuration.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let identity = &config.identity;

    for (field, value) in [
        ("name", &identity.name),
        ("reg_no", &identity.reg_no),
        ("email", &identity.email),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::MissingIdentity(field));
        }
    }
    if !identity.email.trim().is_empty() && !identity.email.contains('@') {
        errors.push(ValidationError::InvalidEmail(identity.email.clone()));
    }

    if let Err(e) = url::Url::parse(&config.source.url) {
        errors.push(ValidationError::InvalidSourceUrl {
            url: config.source.url.clone(),
            reason: e.to_string(),
        });
    }

    if config.delivery.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }
    if config.delivery.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

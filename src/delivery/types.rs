//! Delivery outcomes and error definitions.

use thiserror::Error;

/// Why a single attempt failed. Both variants are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptFailure {
    /// The request could not be built or sent, or no response arrived.
    #[error("attempt {attempt}: failed to execute result request: {message}")]
    Transport { attempt: u32, message: String },

    /// The webhook answered outside 200..=299.
    #[error("attempt {attempt}: result request failed with status {status}: {body}")]
    Status { attempt: u32, status: u16, body: String },
}

impl AttemptFailure {
    pub fn attempt(&self) -> u32 {
        match self {
            Self::Transport { attempt, .. } | Self::Status { attempt, .. } => *attempt,
        }
    }

    /// HTTP status, when the webhook answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { .. } => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Errors that end a delivery.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The payload itself is broken; retrying cannot help.
    #[error("failed to serialize result payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The token cannot be carried in an HTTP header.
    #[error("access token is not a valid header value")]
    InvalidToken,

    /// Every attempt failed.
    #[error("failed after {attempts} attempts. Last error: {last}")]
    Exhausted { attempts: u32, last: AttemptFailure },
}

impl DeliveryError {
    /// Whether the error was reached only after retrying.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

/// Result type for delivery operations.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Record of a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Attempts made, including the successful one.
    pub attempts: u32,
    pub status: u16,
    /// Response body, empty if it could not be read.
    pub body: String,
}

//! Dispatch Error Types
//!
//! Everything past pre-flight validation is captured into the dispatch
//! outcome instead of propagating; the caller is already inside
//! error-handling code and must never see a notification failure surface as
//! its own error.

use crate::config::error::ConfigError;

/// Transport failure reported by a delivery backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DeliveryError {
    #[error("Transport failure: {message}")]
    TransportFailure { message: String },

    #[error("Message rejected by backend: {message}")]
    Rejected { message: String },
}

impl DeliveryError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            message: message.into(),
        }
    }
}

/// Failure inside a pre/post notification hook. Always logged and swallowed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Callback failure: {message}")]
pub struct CallbackError {
    pub message: String,
}

impl CallbackError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The captured cause of an undelivered notification.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("No delivery backend registered for selector '{selector}'")]
    BackendNotFound { selector: String },
}

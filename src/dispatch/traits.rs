//! Traits for notification dispatch
//!
//! The delivery seam: anything that can take a composed `Message` and hand it
//! to a transport. Real mail transports live outside this crate; the builtin
//! log backend exists for development, tests and hosts that only want the
//! alert in their logs.

use crate::dispatch::error::DeliveryError;
use crate::dispatch::message::{DeliveryReceipt, Message};
use async_trait::async_trait;

/// A pluggable delivery backend.
///
/// One `deliver` call per dispatch, at most once; the dispatcher performs no
/// retries. Backends own their own timeout policy.
#[async_trait]
pub trait DeliveryBackend: Send + Sync {
    /// Selector under which this backend is registered.
    fn backend_id(&self) -> &str;

    /// Hand the message to the transport.
    async fn deliver(&self, message: &Message) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Builtin backend that records the delivery in the log and succeeds.
#[derive(Debug, Clone, Default)]
pub struct LogDeliveryBackend;

impl LogDeliveryBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeliveryBackend for LogDeliveryBackend {
    fn backend_id(&self) -> &str {
        "log"
    }

    async fn deliver(&self, message: &Message) -> Result<DeliveryReceipt, DeliveryError> {
        log::info!(
            "Notification to {} - {} ({} sections)",
            message.recipients.join(", "),
            message.subject,
            message.body.len()
        );
        Ok(DeliveryReceipt::new(self.backend_id()))
    }
}

//! Message and receipt value types
//!
//! A `Message` has no identity of its own: it is assembled fresh for one
//! dispatch, handed to the delivery backend and discarded. The receipt is
//! whatever proof of hand-off the backend returns.

use crate::config::settings::EmailFormat;
use crate::context::bundle::SectionBundle;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Template names mirroring the request-bound and background render paths.
pub const TEMPLATE_FOREGROUND: &str = "exception_notification";
pub const TEMPLATE_BACKGROUND: &str = "background_exception_notification";

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: SectionBundle,
    pub format: EmailFormat,
    pub headers: BTreeMap<String, String>,
    /// Which body template the (external) renderer should use.
    pub template_name: String,
}

/// Proof of a completed hand-off to a delivery backend.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryReceipt {
    pub backend_id: String,
    /// Backend-assigned identifier, when the transport provides one.
    pub message_id: Option<String>,
    pub delivered_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    pub fn new(backend_id: impl Into<String>) -> Self {
        Self {
            backend_id: backend_id.into(),
            message_id: None,
            delivered_at: Utc::now(),
        }
    }

    pub fn with_message_id(backend_id: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            backend_id: backend_id.into(),
            message_id: Some(message_id.into()),
            delivered_at: Utc::now(),
        }
    }
}

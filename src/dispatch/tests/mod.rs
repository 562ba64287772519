//! Dispatch system tests


use crate::dispatch::api::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Backend that records every message it is asked to deliver.
pub(crate) struct RecordingBackend {
    pub delivered: Mutex<Vec<Message>>,
}

impl RecordingBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            delivered: Mutex::new(Vec::new()),
        })
    }

    pub fn messages(&self) -> Vec<Message> {
        self.delivered.lock().expect("recorded messages").clone()
    }
}

#[async_trait]
impl DeliveryBackend for RecordingBackend {
    fn backend_id(&self) -> &str {
        "recording"
    }

    async fn deliver(&self, message: &Message) -> Result<DeliveryReceipt, DeliveryError> {
        self.delivered
            .lock()
            .expect("recorded messages")
            .push(message.clone());
        Ok(DeliveryReceipt::with_message_id(
            self.backend_id(),
            format!("msg-{}", self.delivered.lock().expect("recorded messages").len()),
        ))
    }
}

/// Backend that always fails, counting the attempts it received.
pub(crate) struct FailingBackend {
    pub attempts: AtomicUsize,
}

impl FailingBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            attempts: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl DeliveryBackend for FailingBackend {
    fn backend_id(&self) -> &str {
        "failing"
    }

    async fn deliver(&self, _message: &Message) -> Result<DeliveryReceipt, DeliveryError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DeliveryError::transport("smtp connection refused"))
    }
}

//! Common test utilities and helpers
//!
//! Shared fixtures for integration tests: logging setup, a recording
//! delivery backend and sample events.

use async_trait::async_trait;
use errmail::dispatch::api::{DeliveryBackend, DeliveryError, DeliveryReceipt, Message};
use errmail::event::{ErrorEvent, RequestContext};
use serde_json::json;
use std::sync::{Arc, Mutex, OnceLock};

// Held for the whole test process so the logger stays alive
static LOGGER_HANDLE: OnceLock<flexi_logger::LoggerHandle> = OnceLock::new();

/// Initialize test logging once per process. Level comes from `RUST_LOG`
/// when set.
pub fn init_test_logging() {
    let _ = LOGGER_HANDLE.get_or_init(|| {
        flexi_logger::Logger::try_with_env_or_str("info")
            .and_then(|logger| logger.start())
            .expect("test logger initializes")
    });
}

/// Delivery backend that records every composed message.
pub struct RecordingBackend {
    delivered: Mutex<Vec<Message>>,
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
        Ok(DeliveryReceipt::new(self.backend_id()))
    }
}

pub fn sample_event() -> ErrorEvent {
    ErrorEvent::with_backtrace(
        "RuntimeError",
        "boom at row 42",
        vec!["app/handlers.rs:10".to_string(), "src/main.rs:3".to_string()],
    )
}

pub fn sample_request_context() -> RequestContext {
    let mut context = RequestContext::with_action("users#show");
    context
        .request
        .insert("url".to_string(), json!("https://example.com/users/42"));
    context.request.insert("method".to_string(), json!("GET"));
    context
        .session
        .insert("session_id".to_string(), json!("abc123"));
    context
        .environment
        .insert("HTTP_USER_AGENT".to_string(), json!("curl/8.0"));
    context
}

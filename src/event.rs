//! Event types for the notification system
//!
//! An `ErrorEvent` describes the failure being reported; a `RequestContext`
//! carries the request-scoped diagnostic data available when the failure
//! happened inside a request cycle. Background failures have no context.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// The failure being reported.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorEvent {
    pub class_name: String,
    pub message: Option<String>,
    pub backtrace: Vec<String>,
    pub occurred_at: DateTime<Utc>,
}

impl ErrorEvent {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: None,
            backtrace: Vec::new(),
            occurred_at: Utc::now(),
        }
    }

    pub fn with_message(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: Some(message.into()),
            backtrace: Vec::new(),
            occurred_at: Utc::now(),
        }
    }

    pub fn with_backtrace(
        class_name: impl Into<String>,
        message: impl Into<String>,
        backtrace: Vec<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            message: Some(message.into()),
            backtrace,
            occurred_at: Utc::now(),
        }
    }

    /// Build an event from any concrete error value.
    ///
    /// The error's type name becomes the class name and its source chain is
    /// recorded as the backtrace, one frame per cause.
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        let mut frames = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            frames.push(format!("caused by: {cause}"));
            source = cause.source();
        }

        Self {
            class_name: std::any::type_name::<E>().to_string(),
            message: Some(error.to_string()),
            backtrace: frames,
            occurred_at: Utc::now(),
        }
    }

    /// Message text, empty when the error carried none.
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Request-scoped diagnostic data, threaded explicitly through every call.
///
/// Absence (a `None` at the dispatch seam) marks a background failure; no
/// ambient request global is ever consulted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestContext {
    /// Originating action, e.g. `"users#show"`. Feeds the subject line.
    pub action: Option<String>,
    pub request: Map<String, Value>,
    pub session: Map<String, Value>,
    pub environment: Map<String, Value>,
    /// Ambient diagnostic payload the host attached to the request cycle.
    /// Merged with call-time data, call-time values winning per key.
    pub data: Map<String, Value>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Self::default()
        }
    }
}

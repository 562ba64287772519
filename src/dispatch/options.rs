//! Per-call dispatch options
//!
//! Carried into a single `notify` call: settings overrides (highest
//! precedence layer), custom diagnostic data and optional callback hooks.
//! The `data` payload is never merged into configuration; it is routed to
//! context extraction.

use crate::config::settings::{NotifierSettings, SettingsOverlay};
use crate::dispatch::error::CallbackError;
use crate::dispatch::message::DeliveryReceipt;
use crate::event::{ErrorEvent, RequestContext};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Hook invoked before composition and delivery.
///
/// Contract: callbacks return their failures instead of panicking; whatever
/// they return is logged and swallowed, never blocking delivery.
pub type PreCallback = Arc<
    dyn Fn(&ErrorEvent, Option<&RequestContext>, &NotifierSettings) -> Result<(), CallbackError>
        + Send
        + Sync,
>;

/// Hook invoked after the delivery attempt, with the receipt when one exists.
pub type PostCallback = Arc<
    dyn Fn(
            &ErrorEvent,
            Option<&RequestContext>,
            &NotifierSettings,
            Option<&DeliveryReceipt>,
        ) -> Result<(), CallbackError>
        + Send
        + Sync,
>;

#[derive(Clone, Default)]
pub struct NotifyOptions {
    /// Call-time settings overrides; wins over every other layer.
    pub overrides: SettingsOverlay,
    /// Custom diagnostic data for the `data` section, call-time values
    /// winning over ambient context data.
    pub data: Map<String, Value>,
    /// Call-time hooks; when set they replace the dispatcher-level hooks for
    /// this one call.
    pub pre_callback: Option<PreCallback>,
    pub post_callback: Option<PostCallback>,
}

impl NotifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Map<String, Value>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn with_overrides(overrides: SettingsOverlay) -> Self {
        Self {
            overrides,
            ..Self::default()
        }
    }
}

impl std::fmt::Debug for NotifyOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyOptions")
            .field("overrides", &self.overrides)
            .field("data", &self.data)
            .field("pre_callback", &self.pre_callback.as_ref().map(|_| "<fn>"))
            .field("post_callback", &self.post_callback.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

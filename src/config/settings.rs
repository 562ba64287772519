//! Notifier settings schema
//!
//! `NotifierSettings` is the fully resolved option set used for one dispatch;
//! `SettingsOverlay` is a partial layer (instance configuration or call-time
//! overrides) merged over it by the resolver. Settings are built once at
//! notifier setup and only ever read afterwards, so they are safe to share
//! across concurrent dispatch calls.

use crate::config::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Body format requested from the delivery backend.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmailFormat {
    Text,
    Html,
}

/// The recognized notifier option schema.
///
/// Unknown keys in overlay sources are ignored; the diagnostic `data` payload
/// is deliberately not part of this schema (it is routed to context
/// extraction, never merged into configuration).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotifierSettings {
    pub sender: String,
    /// Ordered recipient list. Empty is valid until dispatch time.
    pub recipients: Vec<String>,
    pub subject_prefix: String,
    pub format: EmailFormat,
    /// Sections extracted for request-bound failures, in body order.
    pub sections: Vec<String>,
    /// Sections extracted for background failures, in body order.
    pub background_sections: Vec<String>,
    pub verbose_subject: bool,
    pub normalize_subject: bool,
    pub skip_subject_action_name: bool,
    pub skip_subject_class_name: bool,
    /// Extra message headers, merged key-wise over lower layers.
    pub headers: BTreeMap<String, String>,
    /// Delivery backend selector.
    pub backend: String,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            sender: "\"Error Notifier\" <error.notifier@example.com>".to_string(),
            recipients: Vec::new(),
            subject_prefix: "[ERROR] ".to_string(),
            format: EmailFormat::Text,
            sections: vec![
                "request".to_string(),
                "session".to_string(),
                "environment".to_string(),
                "backtrace".to_string(),
            ],
            background_sections: vec!["backtrace".to_string(), "data".to_string()],
            verbose_subject: true,
            normalize_subject: false,
            skip_subject_action_name: false,
            skip_subject_class_name: false,
            headers: BTreeMap::new(),
            backend: "log".to_string(),
        }
    }
}

impl NotifierSettings {
    /// Dispatch-time validation of required keys.
    ///
    /// Resolution itself is total; only an actual dispatch refuses to proceed
    /// on unusable sender/recipient values.
    pub fn ensure_deliverable(&self) -> ConfigResult<()> {
        if self.sender.trim().is_empty() {
            return Err(ConfigError::MissingSender);
        }
        if self.recipients.iter().all(|r| r.trim().is_empty()) {
            return Err(ConfigError::MissingRecipients);
        }
        Ok(())
    }
}

/// A partial settings layer. `None` fields defer to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SettingsOverlay {
    pub sender: Option<String>,
    pub recipients: Option<Vec<String>>,
    pub subject_prefix: Option<String>,
    pub format: Option<EmailFormat>,
    pub sections: Option<Vec<String>>,
    pub background_sections: Option<Vec<String>>,
    pub verbose_subject: Option<bool>,
    pub normalize_subject: Option<bool>,
    pub skip_subject_action_name: Option<bool>,
    pub skip_subject_class_name: Option<bool>,
    pub headers: Option<BTreeMap<String, String>>,
    pub backend: Option<String>,
}

impl SettingsOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

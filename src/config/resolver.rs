//! Settings resolution
//!
//! Merges call-time overrides over instance configuration over global
//! defaults, first-wins. Resolution is total and never mutates its inputs;
//! validation of required keys is deferred to dispatch time.

use crate::config::settings::{NotifierSettings, SettingsOverlay};

/// Produce the effective settings for one dispatch.
///
/// Precedence per key: `call` wins, then `instance`, then `global`. Header
/// maps merge key-wise with the same precedence instead of being replaced
/// wholesale.
pub fn resolve(
    global: &NotifierSettings,
    instance: &SettingsOverlay,
    call: &SettingsOverlay,
) -> NotifierSettings {
    let mut effective = global.clone();
    apply_overlay(&mut effective, instance);
    apply_overlay(&mut effective, call);
    effective
}

fn apply_overlay(base: &mut NotifierSettings, overlay: &SettingsOverlay) {
    if let Some(sender) = &overlay.sender {
        base.sender = sender.clone();
    }
    if let Some(recipients) = &overlay.recipients {
        base.recipients = recipients.clone();
    }
    if let Some(subject_prefix) = &overlay.subject_prefix {
        base.subject_prefix = subject_prefix.clone();
    }
    if let Some(format) = overlay.format {
        base.format = format;
    }
    if let Some(sections) = &overlay.sections {
        base.sections = sections.clone();
    }
    if let Some(background_sections) = &overlay.background_sections {
        base.background_sections = background_sections.clone();
    }
    if let Some(verbose_subject) = overlay.verbose_subject {
        base.verbose_subject = verbose_subject;
    }
    if let Some(normalize_subject) = overlay.normalize_subject {
        base.normalize_subject = normalize_subject;
    }
    if let Some(skip_action) = overlay.skip_subject_action_name {
        base.skip_subject_action_name = skip_action;
    }
    if let Some(skip_class) = overlay.skip_subject_class_name {
        base.skip_subject_class_name = skip_class;
    }
    if let Some(headers) = &overlay.headers {
        // Headers merge over lower layers rather than replacing them
        for (name, value) in headers {
            base.headers.insert(name.clone(), value.clone());
        }
    }
    if let Some(backend) = &overlay.backend {
        base.backend = backend.clone();
    }
}

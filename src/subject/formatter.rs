//! Subject line formatting
//!
//! Builds the bounded-length summary line for one notification from the
//! error class, the originating action (when request-bound) and the error
//! message, honoring the verbosity and skip flags of the effective settings.
//! Formatting is total: no input combination may fail.

use crate::config::settings::NotifierSettings;
use crate::event::ErrorEvent;
use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// Maximum visible length of a subject before truncation.
pub const MAX_SUBJECT_LENGTH: usize = 120;

/// Marker appended to a truncated subject.
pub const TRUNCATION_MARKER: &str = "...";

static DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("static digit-run pattern is valid"));

/// Format the subject for one dispatch.
///
/// The prefix keeps its own spacing; the remaining segments (action name,
/// class name, message) are single-space joined. With `verbose_subject` the
/// message appears Debug-quoted after an action name and plain when the
/// action name is skipped.
pub fn format_subject(
    event: &ErrorEvent,
    action_name: Option<&str>,
    settings: &NotifierSettings,
) -> String {
    let mut segments: Vec<String> = Vec::new();

    if !settings.skip_subject_action_name {
        if let Some(action) = action_name.filter(|a| !a.is_empty()) {
            segments.push(action.to_string());
        }
    }

    if !settings.skip_subject_class_name {
        segments.push(format!("({})", event.class_name));
    }

    if settings.verbose_subject {
        let message = event.message_text();
        if !message.is_empty() {
            if settings.skip_subject_action_name {
                segments.push(message.to_string());
            } else {
                segments.push(format!("{message:?}"));
            }
        }
    }

    let mut subject = format!("{}{}", settings.subject_prefix, segments.join(" "));

    if settings.normalize_subject {
        subject = normalize_digits(&subject);
    }

    truncate(subject)
}

/// Collapse every maximal run of decimal digits to a literal `N`.
///
/// Subjects differing only by numeric IDs then compare equal, so duplicate
/// alerts can be coalesced upstream. Idempotent.
pub fn normalize_digits(input: &str) -> String {
    DIGIT_RUNS.replace_all(input, "N").into_owned()
}

fn truncate(subject: String) -> String {
    let graphemes: Vec<&str> = subject.graphemes(true).collect();
    if graphemes.len() <= MAX_SUBJECT_LENGTH {
        return subject;
    }

    let mut truncated: String = graphemes[..MAX_SUBJECT_LENGTH].concat();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

//! Generic error handling utilities
//!
//! Unified logging for errors the dispatcher captures instead of raising.
//! Configuration errors are user-actionable (the host operator can fix their
//! settings); transport, extraction and callback failures are system errors
//! that get generic context plus debug-level detail.

/// Trait for errors that can distinguish between user-actionable and system
/// errors.
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)` with an actionable message; when it returns `false`,
/// `user_message()` must return `None`.
pub trait ContextualError: std::error::Error {
    fn is_user_actionable(&self) -> bool;
    fn user_message(&self) -> Option<&str>;
}

/// Log an error with detail level based on its specificity.
///
/// User-actionable errors log their own message; system errors log the
/// operation context, with the error itself at debug level.
pub fn log_error_with_context<E: ContextualError>(error: &E, operation_context: &str) {
    if let Some(user_msg) = error.user_message().filter(|_| error.is_user_actionable()) {
        log::error!("{operation_context} failed: {user_msg}");
    } else {
        log::error!("{operation_context} failed");
    }
    log::debug!("DETAIL: {error}");
    log::debug!("DEBUG_DETAILS: {error:?}");
}

impl ContextualError for crate::config::error::ConfigError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        use crate::config::error::ConfigError;
        match self {
            ConfigError::MissingRecipients => {
                Some("Configure at least one notification recipient")
            }
            ConfigError::MissingSender => Some("Configure a notification sender address"),
            ConfigError::SettingsFileMissing { .. } => {
                Some("Point the notifier at an existing settings file")
            }
            ConfigError::ReadFailed { .. } | ConfigError::ParseFailed { .. } => {
                Some("Check that the settings file is readable, valid TOML")
            }
            ConfigError::InvalidValue { .. } => {
                Some("Fix the rejected settings value")
            }
        }
    }
}

impl ContextualError for crate::context::error::ExtractionError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

impl ContextualError for crate::dispatch::error::DeliveryError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

impl ContextualError for crate::dispatch::error::CallbackError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

impl ContextualError for crate::dispatch::error::DispatchError {
    fn is_user_actionable(&self) -> bool {
        match self {
            crate::dispatch::error::DispatchError::Config(err) => err.is_user_actionable(),
            _ => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            crate::dispatch::error::DispatchError::Config(err) => err.user_message(),
            _ => None,
        }
    }
}

//! Configuration Error Types

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("No recipients configured for notification delivery")]
    MissingRecipients,

    #[error("No sender address configured for notification delivery")]
    MissingSender,

    #[error("Settings file not found: {path}")]
    SettingsFileMissing { path: String },

    #[error("Failed to read settings file '{path}': {cause}")]
    ReadFailed { path: String, cause: String },

    #[error("Failed to parse settings file '{path}': {cause}")]
    ParseFailed { path: String, cause: String },

    #[error("Invalid value for setting '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

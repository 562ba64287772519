//! Public API for the configuration system
//!
//! This module provides the complete public API for notifier configuration.
//! External modules should import from here rather than directly from
//! internal modules.

// Settings schema and overlays
pub use crate::config::settings::{EmailFormat, NotifierSettings, SettingsOverlay};

// Resolution
pub use crate::config::resolver::resolve;

// Settings file loading
pub use crate::config::file::{apply_toml_values, default_settings_path, load_settings_file};

// Error handling
pub use crate::config::error::{ConfigError, ConfigResult};

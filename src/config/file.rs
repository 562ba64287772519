//! TOML settings file parsing and loading
//!
//! Handles loading of optional TOML settings files, including default file
//! discovery under the platform config directory and coercion of list fields
//! that accept either a single string or an array.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::settings::{EmailFormat, NotifierSettings};
use std::path::PathBuf;
use std::str::FromStr;

/// Default settings file location, if a platform config directory exists.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("errmail").join("errmail.toml"))
}

/// Load notifier settings, starting from built-in defaults.
///
/// An explicitly given path must exist; the default path is used only when
/// present. With no file at all the built-in defaults are returned unchanged.
pub async fn load_settings_file(settings_file: Option<PathBuf>) -> ConfigResult<NotifierSettings> {
    let settings_path = match settings_file {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::SettingsFileMissing {
                    path: path.display().to_string(),
                });
            }
            Some(path)
        }
        None => match default_settings_path() {
            Some(path) if path.exists() => Some(path),
            _ => None,
        },
    };

    let mut settings = NotifierSettings::default();

    if let Some(path) = settings_path {
        let contents =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    cause: e.to_string(),
                })?;
        let table = toml::from_str::<toml::Table>(&contents).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;
        apply_toml_values(&mut settings, &table)?;
        log::debug!("Loaded notifier settings from {}", path.display());
    }

    Ok(settings)
}

/// Apply TOML values onto settings. Unknown keys are ignored.
pub fn apply_toml_values(
    settings: &mut NotifierSettings,
    table: &toml::Table,
) -> ConfigResult<()> {
    apply_string_field(table, "sender", &mut settings.sender);
    apply_string_field(table, "subject_prefix", &mut settings.subject_prefix);
    apply_string_field(table, "backend", &mut settings.backend);

    apply_string_array_field(table, "recipients", &mut settings.recipients);
    apply_string_array_field(table, "sections", &mut settings.sections);
    apply_string_array_field(
        table,
        "background_sections",
        &mut settings.background_sections,
    );

    apply_bool_field(table, "verbose_subject", &mut settings.verbose_subject);
    apply_bool_field(table, "normalize_subject", &mut settings.normalize_subject);
    apply_bool_field(
        table,
        "skip_subject_action_name",
        &mut settings.skip_subject_action_name,
    );
    apply_bool_field(
        table,
        "skip_subject_class_name",
        &mut settings.skip_subject_class_name,
    );

    if let Some(value) = table.get("format") {
        let text = value.as_str().ok_or_else(|| ConfigError::InvalidValue {
            key: "format".to_string(),
            message: "expected a string".to_string(),
        })?;
        settings.format =
            EmailFormat::from_str(text).map_err(|_| ConfigError::InvalidValue {
                key: "format".to_string(),
                message: format!("expected 'text' or 'html', got '{text}'"),
            })?;
    }

    if let Some(value) = table.get("headers") {
        let header_table = value.as_table().ok_or_else(|| ConfigError::InvalidValue {
            key: "headers".to_string(),
            message: "expected a table of string values".to_string(),
        })?;
        for (name, header_value) in header_table {
            if let Some(text) = header_value.as_str() {
                settings.headers.insert(name.clone(), text.to_string());
            }
        }
    }

    Ok(())
}

fn apply_string_field(table: &toml::Table, key: &str, target: &mut String) {
    if let Some(text) = table.get(key).and_then(|v| v.as_str()) {
        *target = text.to_string();
    }
}

fn apply_bool_field(table: &toml::Table, key: &str, target: &mut bool) {
    if let Some(flag) = table.get(key).and_then(|v| v.as_bool()) {
        *target = flag;
    }
}

/// Apply a list field that accepts both single string and array formats.
fn apply_string_array_field(table: &toml::Table, key: &str, target: &mut Vec<String>) {
    if let Some(value) = table.get(key) {
        let mut entries = Vec::new();

        if let Some(text) = value.as_str() {
            entries.push(text.to_string());
        } else if let Some(array) = value.as_array() {
            for item in array {
                if let Some(text) = item.as_str() {
                    entries.push(text.to_string());
                }
            }
        }

        if !entries.is_empty() {
            *target = entries;
        }
    }
}

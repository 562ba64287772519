//! Configuration system tests

use crate::config::api::*;
use std::collections::BTreeMap;

fn overlay_with_recipients(recipients: &[&str]) -> SettingsOverlay {
    SettingsOverlay {
        recipients: Some(recipients.iter().map(|r| r.to_string()).collect()),
        ..SettingsOverlay::default()
    }
}

#[test]
fn test_call_time_recipients_win_over_instance() {
    let defaults = NotifierSettings::default();
    let instance = overlay_with_recipients(&["a@x"]);
    let call = overlay_with_recipients(&["b@x"]);

    let effective = resolve(&defaults, &instance, &call);
    assert_eq!(effective.recipients, vec!["b@x".to_string()]);
}

#[test]
fn test_instance_values_win_over_global_defaults() {
    let defaults = NotifierSettings::default();
    let instance = SettingsOverlay {
        subject_prefix: Some("[APP] ".to_string()),
        normalize_subject: Some(true),
        ..SettingsOverlay::default()
    };

    let effective = resolve(&defaults, &instance, &SettingsOverlay::default());
    assert_eq!(effective.subject_prefix, "[APP] ");
    assert!(effective.normalize_subject);
    // Untouched keys fall through to the defaults
    assert_eq!(effective.backend, "log");
    assert!(effective.verbose_subject);
}

#[test]
fn test_resolve_never_mutates_global_defaults() {
    let defaults = NotifierSettings::default();
    let before = defaults.clone();
    let call = overlay_with_recipients(&["ops@example.com"]);

    let _ = resolve(&defaults, &SettingsOverlay::default(), &call);
    assert_eq!(defaults, before);
}

#[test]
fn test_headers_merge_key_wise_across_layers() {
    let mut defaults = NotifierSettings::default();
    defaults
        .headers
        .insert("X-Priority".to_string(), "3".to_string());

    let mut instance_headers = BTreeMap::new();
    instance_headers.insert("X-Priority".to_string(), "1".to_string());
    instance_headers.insert("X-Team".to_string(), "platform".to_string());
    let instance = SettingsOverlay {
        headers: Some(instance_headers),
        ..SettingsOverlay::default()
    };

    let mut call_headers = BTreeMap::new();
    call_headers.insert("X-Team".to_string(), "oncall".to_string());
    let call = SettingsOverlay {
        headers: Some(call_headers),
        ..SettingsOverlay::default()
    };

    let effective = resolve(&defaults, &instance, &call);
    assert_eq!(effective.headers.get("X-Priority").map(String::as_str), Some("1"));
    assert_eq!(effective.headers.get("X-Team").map(String::as_str), Some("oncall"));
}

#[test]
fn test_ensure_deliverable_requires_sender_and_recipients() {
    let mut settings = NotifierSettings::default();
    assert!(matches!(
        settings.ensure_deliverable(),
        Err(ConfigError::MissingRecipients)
    ));

    settings.recipients = vec!["ops@example.com".to_string()];
    assert!(settings.ensure_deliverable().is_ok());

    settings.sender = "   ".to_string();
    assert!(matches!(
        settings.ensure_deliverable(),
        Err(ConfigError::MissingSender)
    ));
}

#[test]
fn test_blank_recipients_are_unusable() {
    let mut settings = NotifierSettings::default();
    settings.recipients = vec!["".to_string(), "  ".to_string()];
    assert!(matches!(
        settings.ensure_deliverable(),
        Err(ConfigError::MissingRecipients)
    ));
}

#[test]
fn test_apply_toml_values_coerces_string_or_array() {
    let mut settings = NotifierSettings::default();
    let table: toml::Table = toml::from_str(
        r#"
        recipients = "ops@example.com"
        sections = ["backtrace"]
        "#,
    )
    .expect("valid toml");

    apply_toml_values(&mut settings, &table).expect("values apply");
    assert_eq!(settings.recipients, vec!["ops@example.com".to_string()]);
    assert_eq!(settings.sections, vec!["backtrace".to_string()]);
}

#[test]
fn test_apply_toml_values_ignores_unknown_keys() {
    let mut settings = NotifierSettings::default();
    let table: toml::Table = toml::from_str(
        r#"
        verbose_subject = false
        totally_unknown_option = 42
        "#,
    )
    .expect("valid toml");

    apply_toml_values(&mut settings, &table).expect("values apply");
    assert!(!settings.verbose_subject);
}

#[test]
fn test_apply_toml_values_rejects_bad_format() {
    let mut settings = NotifierSettings::default();
    let table: toml::Table = toml::from_str(r#"format = "richtext""#).expect("valid toml");

    let result = apply_toml_values(&mut settings, &table);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "format"
    ));
}

#[tokio::test]
async fn test_load_settings_file_reads_toml() {
    use std::io::Write;

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("errmail.toml");
    let mut file = std::fs::File::create(&path).expect("create settings file");
    writeln!(
        file,
        r#"
        sender = "alerts@example.com"
        recipients = ["ops@example.com", "dev@example.com"]
        format = "html"
        normalize_subject = true
        "#
    )
    .expect("write settings file");

    let settings = load_settings_file(Some(path)).await.expect("settings load");
    assert_eq!(settings.sender, "alerts@example.com");
    assert_eq!(settings.recipients.len(), 2);
    assert_eq!(settings.format, EmailFormat::Html);
    assert!(settings.normalize_subject);
    // Unmentioned keys keep their defaults
    assert_eq!(settings.subject_prefix, "[ERROR] ");
}

#[tokio::test]
async fn test_load_settings_file_missing_explicit_path_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.toml");

    let result = load_settings_file(Some(path)).await;
    assert!(matches!(result, Err(ConfigError::SettingsFileMissing { .. })));
}

#[test]
fn test_overlay_is_empty() {
    assert!(SettingsOverlay::new().is_empty());
    assert!(!overlay_with_recipients(&["a@x"]).is_empty());
}

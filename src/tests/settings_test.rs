//! Tests for settings defaults and parsing

use crate::settings::Settings;
use std::path::Path;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.base_url, "http://localhost:8080");
    assert_eq!(settings.settle_delay_ms, 1500);
    assert_eq!(settings.placeholder_rows, 5);
    assert!(!settings.case_sensitive_filter);
    assert_eq!(settings.theme_mode, "light");
}

#[test]
fn test_empty_object_yields_defaults() {
    let settings: Settings = serde_json::from_str("{}").expect("empty object parses");
    assert_eq!(settings.base_url, Settings::default().base_url);
    assert_eq!(settings.placeholder_rows, 5);
}

#[test]
fn test_partial_file_overrides_only_named_fields() {
    let settings: Settings =
        serde_json::from_str(r#"{"settle_delay_ms": 0, "placeholder_rows": 8}"#)
            .expect("partial object parses");
    assert_eq!(settings.settle_delay_ms, 0);
    assert_eq!(settings.placeholder_rows, 8);
    assert_eq!(settings.base_url, "http://localhost:8080");
}

#[test]
fn test_zero_settle_delay_is_allowed() {
    let settings: Settings = serde_json::from_str(r#"{"settle_delay_ms": 0}"#).unwrap();
    assert_eq!(settings.settle_delay_ms, 0);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let settings = Settings::load_from(Path::new("/nonexistent/fraudlens.json"));
    assert_eq!(settings.base_url, Settings::default().base_url);
}

/*!
 * Tests for app configuration
 */

use coltra::Config;
use coltra::app_config::LogLevel;

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_default_config_shouldUseDeepLDefaults() {
    let config = Config::default();
    assert_eq!(config.source_language, "DE");
    assert_eq!(config.target_language, "FR");
    assert_eq!(config.max_items_per_request, 50);
    assert_eq!(config.max_chars_per_request, 30_000);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_from_file_withValidJson_shouldLoadAndValidate() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(
        &dir.path().to_path_buf(),
        "conf.json",
        r#"{
            "source_language": "EN",
            "target_language": "ES",
            "columns": ["H", "I", "J", "Q"],
            "concurrent_requests": 2
        }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.source_language, "EN");
    assert_eq!(config.columns, vec!["H", "I", "J", "Q"]);
    assert_eq!(config.concurrent_requests, 2);
    // unspecified fields keep their defaults
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_from_file_withInvalidLimits_shouldFail() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(
        &dir.path().to_path_buf(),
        "conf.json",
        r#"{"max_chars_per_request": 100000}"#,
    )
    .unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_from_file_or_default_withMissingFile_shouldFallBackToDefaults() {
    let config = Config::from_file_or_default("definitely-missing.json").unwrap();
    assert_eq!(config.source_language, "DE");
}

#[test]
fn test_create_default_at_shouldWriteLoadableFile() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    Config::create_default_at(&path).unwrap();
    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(reloaded.target_language, "FR");
}

#[test]
fn test_resolved_api_key_withConfigValueOnly_shouldUseConfigValue() {
    // no env var manipulation here, CI keeps DEEPL_API_KEY unset
    if std::env::var("DEEPL_API_KEY").is_ok() {
        return;
    }
    let config = Config {
        api_key: "from-config".to_string(),
        ..Config::default()
    };
    assert_eq!(config.resolved_api_key(), "from-config");
}

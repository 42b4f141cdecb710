//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{index::IndexSettings, AppConfig, ConfigLoader, LogConfig, Validate};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.index.key_ledger);
    assert_eq!(config.index.max_key_length, None);
    assert_eq!(config.log.level, "info");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = AppConfig::default();

    config.index.max_key_length = Some(0);
    assert!(config.validate().is_err());

    config.index.max_key_length = Some(64);
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading with no file and no overrides yields defaults.
#[test]
fn test_load_defaults_without_file() {
    let loader = ConfigLoader::new(None::<&str>, "TEST_DEFAULTS_ONLY");
    let config = loader.load().unwrap();
    assert_eq!(config.index, IndexSettings::default());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_toml() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "config.toml",
            r#"
            [index]
            key_ledger = false
            max_key_length = 128

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_TOML_FILE").load().unwrap();
    assert!(!config.index.key_ledger);
    assert_eq!(config.index.max_key_length, Some(128));
    assert_eq!(config.log.level, "debug");

    // Untouched values keep their defaults
    assert!(!config.log.json);
}

/// Test loading a partial JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("config.json", r#"{"index": {"max_key_length": 16}}"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_JSON_FILE").load().unwrap();
    assert_eq!(config.index.max_key_length, Some(16));
    assert!(config.index.key_ledger);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("config.toml", "[index]\nmax_key_length = 128\n")
        .unwrap();

    fixture.set_env("TEST_ENV__INDEX__MAX_KEY_LENGTH", "256");
    fixture.set_env("TEST_ENV__INDEX__KEY_LEDGER", "false");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "warn");

    let config = ConfigLoader::new(Some(&path), "TEST_ENV").load().unwrap();
    assert_eq!(config.index.max_key_length, Some(256));
    assert!(!config.index.key_ledger);
    assert_eq!(config.log.level, "warn");
}

/// Test that a missing explicit file is reported as such.
#[test]
fn test_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");
    let err = ConfigLoader::new(Some(&path), "TEST_MISSING").load().unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("invalid.toml", "[index\nmax_key_length = \"many\"")
        .unwrap();

    let loader = ConfigLoader::new(Some(&path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that values which parse but fail validation are rejected.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("config.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let err = ConfigLoader::new(Some(&path), "TEST_INVALID_VALUES")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

/// Test that unknown file extensions are refused.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("config.ini", "level=info").unwrap();

    let err = ConfigLoader::new(Some(&path), "TEST_EXTENSION").load().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
    let path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_GENERATED").load().unwrap();
    assert_eq!(config.index, IndexSettings::default());
    assert_eq!(config.log.level, LogConfig::default().level);
}

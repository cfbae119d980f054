//! Tests for the config record and info formatting

use std::fs;

use bridge::config::{DEFAULT_NAME, DEFAULT_VERSION};
use bridge::{BridgeConfig, ConfigError, info};
use tempfile::TempDir;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = BridgeConfig::default();
    assert_eq!(config.name, DEFAULT_NAME);
    assert_eq!(config.version, DEFAULT_VERSION);
    assert_eq!(config, BridgeConfig::new("bridge", "0.1.0"));
}

#[test]
fn test_info_formats_name_and_version() {
    assert_eq!(info(&BridgeConfig::new("test", "1.0.0")), "test v1.0.0");
    assert_eq!(BridgeConfig::default().info(), "bridge v0.1.0");
}

#[test]
fn test_info_does_not_escape_fields() {
    let config = BridgeConfig::new("a v b", "");
    assert_eq!(info(&config), "a v b v");
}

// =============================================================================
// TOML TESTS
// =============================================================================

#[test]
fn test_config_from_toml() {
    let config = BridgeConfig::from_toml_str("name = \"demo\"\nversion = \"2.3.4\"\n").unwrap();
    assert_eq!(config, BridgeConfig::new("demo", "2.3.4"));
}

#[test]
fn test_config_missing_fields_use_defaults() {
    let config = BridgeConfig::from_toml_str("name = \"demo\"\n").unwrap();
    assert_eq!(config.version, DEFAULT_VERSION);

    let config = BridgeConfig::from_toml_str("").unwrap();
    assert_eq!(config, BridgeConfig::default());
}

#[test]
fn test_config_invalid_toml() {
    let err = BridgeConfig::from_toml_str("name = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_toml_roundtrip() {
    let config = BridgeConfig::new("roundtrip", "9.9.9");
    let text = config.to_toml_string().unwrap();
    assert!(text.contains("name = \"roundtrip\""));
    assert_eq!(BridgeConfig::from_toml_str(&text).unwrap(), config);
}

// =============================================================================
// FILE TESTS
// =============================================================================

#[test]
fn test_config_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bridge.toml");
    fs::write(&path, "name = \"file\"\nversion = \"1.2.3\"\n").unwrap();

    let config = BridgeConfig::load(&path).unwrap();
    assert_eq!(config.info(), "file v1.2.3");
}

#[test]
fn test_config_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = BridgeConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

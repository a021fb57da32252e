//! Tests for the parser configuration

use std::fs;

use ropf::{KeyResolution, ParserConfig};
use tempfile::TempDir;
use test_case::test_case;

#[test]
fn test_defaults() {
    let config = ParserConfig::default();
    assert_eq!(config.key_resolution, KeyResolution::Auto);
    assert!(config.inherit_scenario_metadata);
}

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(ParserConfig::from_toml_str("").unwrap(), ParserConfig::default());
}

#[test_case("auto", KeyResolution::Auto ; "auto")]
#[test_case("declared", KeyResolution::Declared ; "declared")]
#[test_case("registry", KeyResolution::Registry ; "registry")]
fn test_key_resolution(value: &str, expected: KeyResolution) {
    let config =
        ParserConfig::from_toml_str(&format!("[parser]\nkey_resolution = \"{value}\"\n")).unwrap();
    assert_eq!(config.key_resolution, expected);
    assert!(config.inherit_scenario_metadata);
}

#[test]
fn test_inheritance_switch() {
    let config =
        ParserConfig::from_toml_str("[parser]\ninherit_scenario_metadata = false\n").unwrap();
    assert_eq!(config.key_resolution, KeyResolution::Auto);
    assert!(!config.inherit_scenario_metadata);
}

#[test]
fn test_unknown_key_resolution_is_an_error() {
    assert!(ParserConfig::from_toml_str("[parser]\nkey_resolution = \"guess\"\n").is_err());
}

#[test]
fn test_round_trip_through_toml() {
    let config = ParserConfig {
        key_resolution: KeyResolution::Declared,
        inherit_scenario_metadata: false,
    };
    let text = config.to_toml_string().unwrap();
    assert!(text.contains("[parser]"));
    assert_eq!(ParserConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ropf.toml");
    fs::write(&path, "[parser]\nkey_resolution = \"registry\"\n").unwrap();

    let config = ParserConfig::load_or_default(Some(path.as_path())).unwrap();
    assert_eq!(config.key_resolution, KeyResolution::Registry);
}

#[test]
fn test_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");
    let error = ParserConfig::load(&path).unwrap_err();
    assert!(format!("{error:#}").contains("failed to read"));
}

#[test]
fn test_no_file_gives_defaults() {
    assert_eq!(ParserConfig::load_or_default(None).unwrap(), ParserConfig::default());
}

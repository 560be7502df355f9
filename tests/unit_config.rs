// tests/unit_config.rs
use propcop_core::config::{self, Config};
use propcop_core::types::Severity;
use tempfile::TempDir;

#[test]
fn test_load_from_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("propcop.toml")).unwrap();
    assert_eq!(config.rules.max_component_lines, 150);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("propcop.toml");
    std::fs::write(&path, "[rules]\nmax_component_lines = 42\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rules.max_component_lines, 42);
}

#[test]
fn test_load_from_malformed_file_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("propcop.toml");
    std::fs::write(&path, "[rules\nnot toml").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_write_default_round_trips() {
    let dir = TempDir::new().unwrap();
    assert!(config::write_default(dir.path()).unwrap());
    // Second call leaves the existing file alone.
    assert!(!config::write_default(dir.path()).unwrap());

    let config = Config::load_from(&dir.path().join("propcop.toml")).unwrap();
    assert_eq!(config.rules.min_duplicate_lines, 4);
}

#[test]
fn test_invalid_ignore_regex_errors() {
    let mut config = Config::default();
    assert!(config.parse_toml("[rules]\nignore = [\"([\"]\n").is_err());
}

#[test]
fn test_severity_override_for_unknown_rule_errors() {
    let mut config = Config::default();
    assert!(config.parse_toml("[rules.severity]\nQ99 = \"error\"\n").is_err());
}

#[test]
fn test_severity_default_passthrough() {
    let config = Config::default();
    assert_eq!(
        config.severity_for("J02", Severity::Warning),
        Some(Severity::Warning)
    );
}

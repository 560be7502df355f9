// src/config.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{PropcopError, Result};
use crate::types::Severity;

pub const CONFIG_FILE: &str = "propcop.toml";

pub const DEFAULT_TOML: &str = r#"# propcop.toml
[rules]
# A component body beyond this many lines is an extract-component candidate (C01).
max_component_lines = 150
# JSX fragments shorter than this never count as duplicates (J01).
min_duplicate_lines = 4
# Regex patterns of paths to skip during discovery.
ignore = []

# Per-rule severity overrides: allow | info | warning | error
[rules.severity]
# J02 = "allow"
"#;

/// Directories never descended into during discovery.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "out",
    "coverage",
    ".next",
    ".cache",
    "vendor",
    "__snapshots__",
];

/// A severity override from `[rules.severity]`. `Allow` disables the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityOverride {
    Allow,
    Info,
    Warning,
    Error,
}

impl SeverityOverride {
    /// Maps the override to an output severity. `None` means suppressed.
    #[must_use]
    pub fn as_severity(self) -> Option<Severity> {
        match self {
            Self::Allow => None,
            Self::Info => Some(Severity::Info),
            Self::Warning => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_max_component_lines")]
    pub max_component_lines: usize,
    #[serde(default = "default_min_duplicate_lines")]
    pub min_duplicate_lines: usize,
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub severity: HashMap<String, SeverityOverride>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_component_lines: default_max_component_lines(),
            min_duplicate_lines: default_min_duplicate_lines(),
            ignore: Vec::new(),
            severity: HashMap::new(),
        }
    }
}

const fn default_max_component_lines() -> usize { 150 }
const fn default_min_duplicate_lines() -> usize { 4 }

/// On-disk shape of `propcop.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PropcopToml {
    #[serde(default)]
    pub rules: RuleConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub verbose: bool,
    pub rules: RuleConfig,
    /// Compiled form of `rules.ignore`, matched against normalized paths.
    pub ignore_patterns: Vec<regex::Regex>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config, merging `propcop.toml` from the current directory
    /// when present.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Same as [`Config::load`] with an explicit config path (tests).
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        if path.is_file() {
            let content = std::fs::read_to_string(path).map_err(|source| PropcopError::Io {
                source,
                path: path.to_path_buf(),
            })?;
            config.parse_toml(&content)?;
        }
        Ok(config)
    }

    /// Applies TOML content on top of the current config.
    ///
    /// # Errors
    /// Returns error on malformed TOML or unknown rule ids in
    /// `[rules.severity]`.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed: PropcopToml = toml::from_str(content)?;
        self.rules = parsed.rules;
        self.ignore_patterns = self
            .rules
            .ignore
            .iter()
            .map(|p| regex::Regex::new(p))
            .collect::<std::result::Result<_, _>>()?;
        self.validate()
    }

    /// Rejects severity overrides that name rules the registry does not know.
    ///
    /// # Errors
    /// Returns `PropcopError::Config` naming the first unknown rule id.
    pub fn validate(&self) -> Result<()> {
        for id in self.rules.severity.keys() {
            if !crate::rules::is_known_rule(id) {
                return Err(PropcopError::Config(format!(
                    "unknown rule id '{id}' in [rules.severity]"
                )));
            }
        }
        Ok(())
    }

    /// Effective severity for a rule: override if present, otherwise the
    /// rule's default. `None` means the rule is disabled.
    #[must_use]
    pub fn severity_for(&self, rule: &str, default: Severity) -> Option<Severity> {
        match self.rules.severity.get(rule) {
            Some(over) => over.as_severity(),
            None => Some(default),
        }
    }
}

/// Writes the default config to `propcop.toml` unless one already exists.
///
/// # Errors
/// Returns error if the file write fails.
pub fn write_default(dir: &Path) -> Result<bool> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Ok(false);
    }
    std::fs::write(&path, DEFAULT_TOML).map_err(|source| PropcopError::Io { source, path })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.rules.max_component_lines, 150);
        assert_eq!(config.rules.min_duplicate_lines, 4);
    }

    #[test]
    fn test_parse_overrides() {
        let mut config = Config::new();
        config
            .parse_toml(
                r#"
                [rules]
                max_component_lines = 80

                [rules.severity]
                J02 = "allow"
                C01 = "error"
            "#,
            )
            .unwrap();
        assert_eq!(config.rules.max_component_lines, 80);
        assert_eq!(config.severity_for("J02", Severity::Warning), None);
        assert_eq!(
            config.severity_for("C01", Severity::Info),
            Some(Severity::Error)
        );
        // No override: default passes through.
        assert_eq!(
            config.severity_for("S02", Severity::Error),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let mut config = Config::new();
        let err = config
            .parse_toml("[rules.severity]\nZZ99 = \"error\"\n")
            .unwrap_err();
        assert!(err.to_string().contains("ZZ99"));
    }

    #[test]
    fn test_default_toml_parses() {
        let mut config = Config::new();
        config.parse_toml(DEFAULT_TOML).unwrap();
        assert_eq!(config.rules.min_duplicate_lines, 4);
    }
}

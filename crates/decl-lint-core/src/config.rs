//! Configuration types for decl-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for decl-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the ordered argument list for a rule.
    ///
    /// Rules without a config table, or without an `arguments` array, receive
    /// an empty list and fall back to their built-in defaults.
    #[must_use]
    pub fn rule_arguments(&self, rule_name: &str) -> &[toml::Value] {
        self.rules
            .get(rule_name)
            .map_or(&[], |c| c.arguments.as_slice())
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/target/**".to_string(), "**/vendor/**".to_string()],
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Ordered, loosely-typed arguments handed to the rule at first apply.
    #[serde(default)]
    pub arguments: crate::arguments::Arguments,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("max-public-structs"));
        assert!(config.rule_arguments("max-public-structs").is_empty());
    }

    #[test]
    fn parse_config_with_arguments() {
        let toml = r#"
[analyzer]
root = "./src"
exclude = ["**/generated/**"]

[rules.max-public-structs]
enabled = true
severity = "error"
arguments = [3]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./src"));
        assert!(config.is_rule_enabled("max-public-structs"));
        assert_eq!(
            config.rule_severity("max-public-structs"),
            Some(crate::Severity::Error)
        );
        assert_eq!(
            config.rule_arguments("max-public-structs"),
            &[toml::Value::Integer(3)]
        );
    }

    #[test]
    fn disabled_rule() {
        let toml = r#"
[rules.max-public-structs]
enabled = false
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        assert!(!config.is_rule_enabled("max-public-structs"));
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(Config::parse("[rules").is_err());
    }
}

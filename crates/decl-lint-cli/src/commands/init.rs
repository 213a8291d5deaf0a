//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# decl-lint configuration

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
    "**/generated/**",
]

# Rule configurations
# Each rule can be enabled/disabled, have its severity overridden, and take
# an ordered list of arguments.

[rules.max-public-structs]
enabled = true
# severity = "error"  # Override default severity
# arguments = [5]     # Maximum publicly visible type declarations per file;
#                     # a value below 1 disables the rule
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("decl-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created decl-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit decl-lint.toml to configure rules");
    println!("  2. Run: decl-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = decl_lint_core::Config::parse(DEFAULT_CONFIG).expect("template should parse");
        assert!(config.is_rule_enabled("max-public-structs"));
    }
}

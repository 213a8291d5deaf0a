//! Check command implementation.

use anyhow::{Context, Result};
use decl_lint_core::{Analyzer, Config};
use decl_lint_rules::{all_rules, rule_by_name};
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &crate::config_resolver::ConfigSource,
) -> Result<()> {
    let config = match source {
        crate::config_resolver::ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    // Build analyzer
    let mut builder = Analyzer::builder().root(path).config(config);

    // Add exclude patterns
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    // Add rules based on filter
    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names)
    } else {
        all_rules()
    };

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    super::output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str]) -> Vec<decl_lint_core::RuleBox> {
    let mut rules: Vec<decl_lint_core::RuleBox> = Vec::new();

    for name in names {
        match rule_by_name(name) {
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

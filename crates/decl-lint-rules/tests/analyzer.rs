//! Integration test: max-public-structs end-to-end via Analyzer.
//!
//! Builds a scratch project with tempfile and verifies the full
//! discover → parse → apply → aggregate pipeline: per-file failures, config
//! arguments, disabling, and severity overrides.

use decl_lint_core::{Analyzer, Category, Config, Severity};
use decl_lint_rules::MaxPublicStructs;
use std::path::Path;

const OVER_BUDGET: &str = "
pub struct Account;
pub struct Ledger;
pub struct Entry;
pub enum Currency { Usd, Eur }
pub trait Posting {}
pub type Balance = i64;
";

const UNDER_BUDGET: &str = "
pub struct Config;
struct internal_state;
";

fn scratch_project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let src = dir.path().join("src");
    std::fs::create_dir(&src).expect("src dir should be created");
    std::fs::write(src.join("ledger.rs"), OVER_BUDGET).expect("fixture should write");
    std::fs::write(src.join("config.rs"), UNDER_BUDGET).expect("fixture should write");
    dir
}

fn analyze(root: &Path, config: Config) -> decl_lint_core::LintResult {
    Analyzer::builder()
        .root(root)
        .config(config)
        .rule(MaxPublicStructs::new())
        .build()
        .expect("analyzer should build")
        .analyze()
        .expect("analysis should succeed")
}

#[test]
fn reports_only_the_over_budget_file() {
    let dir = scratch_project();
    let result = analyze(dir.path(), Config::default());

    assert_eq!(result.files_checked, 2);
    assert_eq!(
        result.failures.len(),
        1,
        "expected 1 failure, got: {:#?}",
        result.failures
    );

    let failure = &result.failures[0];
    assert_eq!(failure.rule, "max-public-structs");
    assert_eq!(failure.location.file, Path::new("src/ledger.rs"));
    assert_eq!(failure.location.line, 1);
    assert!(failure.message.contains("maximum number (5)"));
    assert_eq!(failure.category, Category::Style);
    assert_eq!(failure.severity, Severity::Warning);
}

#[test]
fn config_arguments_reach_the_rule() {
    let dir = scratch_project();
    let config = Config::parse(
        r#"
[rules.max-public-structs]
arguments = [1]
"#,
    )
    .expect("config should parse");

    let result = analyze(dir.path(), config);

    // Budget 1: ledger.rs (6 types) and config.rs (1 visible type) — only the
    // ledger file exceeds it.
    assert_eq!(result.failures.len(), 1);
    assert!(result.failures[0].message.contains("maximum number (1)"));
}

#[test]
fn disabled_rule_produces_nothing() {
    let dir = scratch_project();
    let config = Config::parse(
        r#"
[rules.max-public-structs]
enabled = false
"#,
    )
    .expect("config should parse");

    let result = analyze(dir.path(), config);
    assert!(result.failures.is_empty());
    assert_eq!(result.files_checked, 2);
}

#[test]
fn zero_argument_disables_for_the_whole_run() {
    let dir = scratch_project();
    let config = Config::parse(
        r#"
[rules.max-public-structs]
arguments = [0]
"#,
    )
    .expect("config should parse");

    let result = analyze(dir.path(), config);
    assert!(result.failures.is_empty());
}

#[test]
fn severity_override_applies() {
    let dir = scratch_project();
    let config = Config::parse(
        r#"
[rules.max-public-structs]
severity = "error"
"#,
    )
    .expect("config should parse");

    let result = analyze(dir.path(), config);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].severity, Severity::Error);
    assert!(result.has_errors());
}

#[test]
fn unparseable_files_are_skipped_not_fatal() {
    let dir = scratch_project();
    std::fs::write(dir.path().join("src/broken.rs"), "pub struct {")
        .expect("fixture should write");

    let result = analyze(dir.path(), Config::default());

    // The broken file is logged and skipped; the rest of the run proceeds.
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].location.file, Path::new("src/ledger.rs"));
}

#[test]
fn bad_arguments_surface_as_internal_failures_per_file() {
    let dir = scratch_project();
    let config = Config::parse(
        r#"
[rules.max-public-structs]
arguments = ["abc"]
"#,
    )
    .expect("config should parse");

    let result = analyze(dir.path(), config);

    // One internal failure per processed file; traversal never ran.
    assert_eq!(result.failures.len(), 2);
    for failure in &result.failures {
        assert_eq!(failure.category, Category::Internal);
        assert!(failure.message.contains("max-public-structs"));
    }
}

//! # decl-lint-core
//!
//! Core framework for declaration linting based on `syn` AST analysis.
//!
//! This crate provides the foundational traits and types for building
//! declaration-budget linters. It includes:
//!
//! - [`Rule`] trait for per-file AST-based rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Failure`] for representing lint findings
//! - [`arguments`] for loosely-typed rule configuration arguments
//!
//! ## Example
//!
//! ```ignore
//! use decl_lint_core::{Analyzer, Rule, Severity};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

/// Loosely-typed rule arguments and their validation.
pub mod arguments;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use arguments::{ArgumentError, Arguments};
pub use config::{Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use types::{
    Category, Failure, FailureDiagnostic, LintResult, Location, Severity, INTERNAL_FAILURE_CODE,
};

//! # decl-lint-rules
//!
//! Built-in lint rules for decl-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | DL001 | `max-public-structs` | Limits the number of publicly visible type declarations per file |
//!
//! ## Usage
//!
//! ```ignore
//! use decl_lint_core::Analyzer;
//! use decl_lint_rules::MaxPublicStructs;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MaxPublicStructs::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod max_public_structs;

pub use max_public_structs::MaxPublicStructs;

/// Re-export core types for convenience.
pub use decl_lint_core::{Failure, Rule, Severity};

use decl_lint_core::RuleBox;

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(MaxPublicStructs::new())]
}

/// Returns the rule registered under `name` (or its code), if any.
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    match name {
        max_public_structs::NAME | max_public_structs::CODE => {
            Some(Box::new(MaxPublicStructs::new()))
        }
        _ => None,
    }
}

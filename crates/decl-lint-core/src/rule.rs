//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::types::{Failure, Severity};

/// A per-file lint rule based on `syn` AST analysis.
///
/// Implement this trait to create rules that analyze individual source files.
/// Rules receive the parsed AST, the file context, and the ordered argument
/// list from their configuration table. A rule instance is shared across every
/// file in a run, so rules resolve their arguments exactly once — on first
/// apply — and reuse the resolved settings afterwards (see
/// [`std::sync::OnceLock`]).
///
/// # Example
///
/// ```ignore
/// use decl_lint_core::{Failure, FileContext, Rule, Severity};
/// use syn::visit::Visit;
///
/// pub struct NoEmptyEnums;
///
/// impl Rule for NoEmptyEnums {
///     fn name(&self) -> &'static str { "no-empty-enums" }
///     fn code(&self) -> &'static str { "DL009" }
///
///     fn apply(
///         &self,
///         ctx: &FileContext,
///         ast: &syn::File,
///         _arguments: &[toml::Value],
///     ) -> Vec<Failure> {
///         let mut visitor = EmptyEnumVisitor::new(ctx);
///         visitor.visit_file(ast);
///         visitor.failures
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "max-public-structs").
    ///
    /// The name is the rule's published identity: configuration files and
    /// reports reference it, so it never changes and never depends on
    /// configuration state.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "DL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for failures from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Applies the rule to a single file and returns any failures found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `ast` - The parsed syntax tree of the file
    /// * `arguments` - Ordered configuration arguments; consumed on first
    ///   apply only
    ///
    /// # Returns
    ///
    /// A vector of failures found in this file.
    fn apply(&self, ctx: &FileContext, ast: &syn::File, arguments: &[toml::Value]) -> Vec<Failure>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn apply(
            &self,
            ctx: &FileContext,
            _ast: &syn::File,
            _arguments: &[toml::Value],
        ) -> Vec<Failure> {
            vec![Failure::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::new(ctx.path.to_path_buf(), 1, 1),
                "Test failure",
            )]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
    }

    #[test]
    fn rules_are_object_safe() {
        let boxed: RuleBox = Box::new(TestRule);
        assert_eq!(boxed.name(), "test-rule");
    }
}

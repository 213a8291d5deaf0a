//! Rule to limit the number of publicly visible type declarations per file.
//!
//! # Rationale
//!
//! Files that accumulate many exported types become grab-bag modules: hard to
//! navigate, hard to review, and a magnet for further growth. This rule caps
//! how many publicly visible type declarations a single file may carry and
//! reports one file-scoped failure when the budget is exceeded.
//!
//! # Detected Declarations
//!
//! Named type definitions at any nesting depth the traversal reaches —
//! structs, enums, unions, traits, and type aliases — whose name starts with
//! an upper-case character.
//!
//! # Configuration
//!
//! No arguments: budget of 5. One integer argument: explicit budget; a value
//! below 1 disables the rule for the run.
//!
//! ```toml
//! [rules.max-public-structs]
//! arguments = [3]
//! ```

use decl_lint_core::arguments::{check_argument_count, int_argument, ArgumentError};
use decl_lint_core::{Failure, FileContext, Rule};
use std::sync::OnceLock;
use syn::visit::Visit;
use syn::{ItemEnum, ItemStruct, ItemTrait, ItemType, ItemUnion};

/// Rule code for max-public-structs.
pub const CODE: &str = "DL001";

/// Rule name for max-public-structs.
pub const NAME: &str = "max-public-structs";

const DEFAULT_MAX: i64 = 5;

/// Limits the number of publicly visible type declarations per file.
///
/// One instance is shared across every file in a run. The budget is resolved
/// from the configured arguments on the first apply and is immutable
/// afterwards; concurrent first applies all observe the same resolution.
#[derive(Debug, Default)]
pub struct MaxPublicStructs {
    max: OnceLock<Result<i64, ArgumentError>>,
}

impl MaxPublicStructs {
    /// Creates a new, not-yet-configured rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve_max(arguments: &[toml::Value]) -> Result<i64, ArgumentError> {
        if arguments.is_empty() {
            return Ok(DEFAULT_MAX);
        }
        check_argument_count(NAME, 1, arguments)?;
        int_argument(NAME, &arguments[0])
    }
}

impl Rule for MaxPublicStructs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Limits the number of publicly visible type declarations per file"
    }

    fn apply(&self, ctx: &FileContext, ast: &syn::File, arguments: &[toml::Value]) -> Vec<Failure> {
        let max = match self.max.get_or_init(|| Self::resolve_max(arguments)) {
            Ok(max) => *max,
            Err(err) => {
                return vec![Failure::internal(NAME, ctx.file_location(), err.to_string())];
            }
        };

        // A budget below 1 disables the rule entirely.
        if max < 1 {
            return Vec::new();
        }

        let mut counter = PublicTypeCounter { count: 0 };
        counter.visit_file(ast);

        if counter.count > max {
            return vec![Failure::new(
                CODE,
                NAME,
                self.default_severity(),
                ctx.file_location(),
                format!(
                    "you have exceeded the maximum number ({max}) of public struct declarations"
                ),
            )];
        }

        Vec::new()
    }
}

/// Walks the full tree counting publicly visible type declarations.
///
/// Delegating to the default walk means declarations nested in function bodies
/// and inline modules are counted too, at whatever depth they appear.
struct PublicTypeCounter {
    count: i64,
}

impl PublicTypeCounter {
    fn record(&mut self, ident: &syn::Ident) {
        if is_publicly_visible(&ident.to_string()) {
            self.count += 1;
        }
    }
}

impl<'ast> Visit<'ast> for PublicTypeCounter {
    fn visit_item_struct(&mut self, node: &'ast ItemStruct) {
        self.record(&node.ident);
        syn::visit::visit_item_struct(self, node);
    }

    fn visit_item_enum(&mut self, node: &'ast ItemEnum) {
        self.record(&node.ident);
        syn::visit::visit_item_enum(self, node);
    }

    fn visit_item_union(&mut self, node: &'ast ItemUnion) {
        self.record(&node.ident);
        syn::visit::visit_item_union(self, node);
    }

    fn visit_item_trait(&mut self, node: &'ast ItemTrait) {
        self.record(&node.ident);
        syn::visit::visit_item_trait(self, node);
    }

    fn visit_item_type(&mut self, node: &'ast ItemType) {
        self.record(&node.ident);
        syn::visit::visit_item_type(self, node);
    }
}

/// A name is publicly visible when uppercasing its leading character yields
/// that character unchanged. Empty names are never visible.
///
/// The comparison is Unicode-aware, not an ASCII check: `É` counts, `é` does
/// not, and a character that expands under uppercasing (such as `ß`) is not
/// its own upper-case form.
fn is_publicly_visible(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| first.to_uppercase().eq(std::iter::once(first)))
}

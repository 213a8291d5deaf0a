//! List rules command implementation.

use decl_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  decl-lint check --rules max-public-structs");
    println!("  decl-lint check --rules DL001");
}

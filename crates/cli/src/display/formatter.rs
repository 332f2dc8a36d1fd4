use std::path::Path;

use bazel_lens_core::{ActionKind, CommandDescriptor};

use super::command_breakdown::print_command_breakdown;

pub fn action_icon(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Build => "🔨",
        ActionKind::Test => "🧪",
    }
}

/// One-line summary: icon, title and 1-based declaration position
pub fn format_action_line(action: &CommandDescriptor) -> String {
    format!(
        "{} {} (line {}, column {})",
        action_icon(action.action_kind),
        action.title,
        action.anchor.line,
        action.anchor.column
    )
}

pub fn print_actions(document: &Path, actions: &[CommandDescriptor]) {
    println!("🔍 Analyzing: {}", document.display());
    println!("{}", "=".repeat(80));

    if actions.is_empty() {
        println!("No build or test actions found.");
        return;
    }

    for (index, action) in actions.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", format_action_line(action));
        print_command_breakdown(action);
    }

    println!("{}", "=".repeat(80));
    println!("✅ {} action(s)", actions.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazel_lens_core::{QueryLocation, RuleRecord};

    #[test]
    fn test_format_test_action() {
        let rule = RuleRecord::new(
            "//pkg:lib_test",
            "rust_test",
            QueryLocation::new("/w/pkg/BUILD", 9, 1),
        );
        let action = CommandDescriptor::from_rule(&rule, "/w", "_test");

        assert_eq!(
            format_action_line(&action),
            "🧪 Test //pkg:lib_test (line 9, column 1)"
        );
    }
}

use bazel_lens_core::CommandDescriptor;

pub fn print_command_breakdown(action: &CommandDescriptor) {
    for line in command_breakdown_lines(action) {
        println!("{line}");
    }
}

pub fn command_breakdown_lines(action: &CommandDescriptor) -> Vec<String> {
    let mut lines = vec![
        "   🔧 Command breakdown:".to_string(),
        format!("      • command: {}", action.command),
        format!(
            "      • working directory: {}",
            action.arguments.working_directory.display()
        ),
    ];

    if action.arguments.options.is_empty() {
        lines.push("      • options: (none)".to_string());
    } else {
        lines.push(format!("      • options: {}", action.arguments.options.join(" ")));
    }

    lines
}

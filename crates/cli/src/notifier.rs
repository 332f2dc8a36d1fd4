use bazel_lens_core::Notifier;

/// Prints warnings to stderr, where an interactive user will see them
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
        eprintln!("warning: {message}");
    }
}

//! User-visible notifications raised by the core

/// Host capability for surfacing warnings to the user
pub trait Notifier: Send + Sync {
    fn warn(&self, message: &str);
}

/// Notifier that only logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

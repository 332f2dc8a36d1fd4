pub mod cli;
pub mod commands;
pub mod display;
pub mod notifier;
pub mod utils;

// Re-export commonly used items
pub use cli::{Commands, Lens};

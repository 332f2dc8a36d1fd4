//! bazel-lens - Build and test actions for Bazel BUILD files
//!
//! This crate provides functionality to:
//! - Find the Bazel workspace a BUILD file belongs to
//! - Query the rules declared in that file's package
//! - Map each rule to a build or test action anchored at its declaration
pub mod config;
pub mod error;
pub mod lens;
pub mod notifier;
pub mod query;
pub mod types;
pub mod workspace;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Settings;
pub use lens::{ActionComposer, NOT_IN_WORKSPACE_WARNING};
pub use notifier::{Notifier, TracingNotifier};
pub use query::{BazelQuery, QueryEngine};
pub use tokio_util::sync::CancellationToken;
pub use workspace::{WorkspaceRootResolver, normalize, package_label};

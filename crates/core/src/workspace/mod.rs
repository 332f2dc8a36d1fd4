//! Workspace root discovery and package labels

mod package;
mod path;
mod resolver;

pub use package::{ROOT_SCOPE, package_label, rules_in_package};
pub use path::normalize;
pub use resolver::{FsProbe, PathProbe, WorkspaceRootResolver};

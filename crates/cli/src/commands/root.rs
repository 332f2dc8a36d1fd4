use anyhow::{Context, Result, bail};
use tracing::debug;

use bazel_lens_core::{NOT_IN_WORKSPACE_WARNING, Notifier, Settings, WorkspaceRootResolver};

use crate::notifier::StderrNotifier;
use crate::utils::absolute_path;

pub fn root_command(filepath: &str) -> Result<()> {
    debug!("Resolving workspace root for: {}", filepath);

    let document = absolute_path(filepath)?;
    let settings = Settings::load_for(&document).context("Failed to load bazel-lens settings")?;

    match WorkspaceRootResolver::from_settings(&settings).resolve(&document) {
        Some(root) => {
            println!("{}", root.display());
            Ok(())
        }
        None => {
            StderrNotifier.warn(NOT_IN_WORKSPACE_WARNING);
            bail!("No Bazel workspace found for {}", document.display())
        }
    }
}

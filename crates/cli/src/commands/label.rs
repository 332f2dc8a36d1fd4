use anyhow::{Context, Result, bail};
use tracing::debug;

use bazel_lens_core::{
    NOT_IN_WORKSPACE_WARNING, Notifier, Settings, WorkspaceRootResolver, package_label,
};

use crate::notifier::StderrNotifier;
use crate::utils::absolute_path;

pub fn label_command(filepath: &str) -> Result<()> {
    debug!("Computing package label for: {}", filepath);

    let document = absolute_path(filepath)?;
    let settings = Settings::load_for(&document).context("Failed to load bazel-lens settings")?;

    let label = WorkspaceRootResolver::from_settings(&settings)
        .resolve(&document)
        .and_then(|root| package_label(&root, &document));

    match label {
        Some(label) => {
            println!("{label}");
            Ok(())
        }
        None => {
            StderrNotifier.warn(NOT_IN_WORKSPACE_WARNING);
            bail!("No Bazel workspace found for {}", document.display())
        }
    }
}

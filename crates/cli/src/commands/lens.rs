use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use bazel_lens_core::{
    ActionComposer, BazelQuery, CancellationToken, CommandDescriptor, Notifier, Settings,
    workspace::PathProbe,
};

use crate::display::print_actions;
use crate::notifier::StderrNotifier;
use crate::utils::absolute_path;

pub async fn lens_command(filepath: &str, json: bool) -> Result<()> {
    debug!("Composing actions for: {}", filepath);

    let document = absolute_path(filepath)?;
    if !document.exists() {
        return Err(anyhow::anyhow!("File not found: {}", document.display()));
    }

    let settings = Settings::load_for(&document).context("Failed to load bazel-lens settings")?;
    debug!("Using settings: {:?}", settings);

    let notifier = Arc::new(StderrNotifier);
    let engine = Arc::new(BazelQuery::from_settings(&settings));
    let composer = ActionComposer::from_settings(&settings, engine, notifier.clone());

    // Ctrl-C aborts the running query instead of leaving it orphaned
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let actions = compose_or_warn(&composer, &document, Some(&cancel), notifier.as_ref()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&actions)?);
    } else {
        print_actions(&document, &actions);
    }

    Ok(())
}

/// Compose actions, reporting a failed query as a warning and an empty list.
///
/// Any other error (configuration, IO, cancellation) is returned.
pub async fn compose_or_warn<P: PathProbe>(
    composer: &ActionComposer<P>,
    document: &Path,
    cancel: Option<&CancellationToken>,
    notifier: &dyn Notifier,
) -> Result<Vec<CommandDescriptor>> {
    match composer.compose(document, cancel).await {
        Ok(actions) => Ok(actions),
        Err(e) if e.is_query_failure() => {
            notifier.warn(&format!("Bazel query failed: {e}"));
            Ok(Vec::new())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to compose actions for {}", document.display()))
        }
    }
}

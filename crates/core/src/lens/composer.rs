use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::{DEFAULT_TEST_RULE_SUFFIX, Settings};
use crate::error::{Error, Result};
use crate::notifier::Notifier;
use crate::query::QueryEngine;
use crate::types::CommandDescriptor;
use crate::workspace::{
    FsProbe, PathProbe, WorkspaceRootResolver, normalize, package_label, rules_in_package,
};

pub const NOT_IN_WORKSPACE_WARNING: &str =
    "Bazel BUILD CodeLens unavailable as currently opened file is not in a Bazel workspace";

/// Turns a BUILD file into build/test actions for the rules it declares.
///
/// Holds no per-request state; concurrent `compose` calls are independent.
pub struct ActionComposer<P: PathProbe = FsProbe> {
    resolver: WorkspaceRootResolver<P>,
    engine: Arc<dyn QueryEngine>,
    notifier: Arc<dyn Notifier>,
    query_options: Vec<String>,
    test_rule_suffix: String,
}

impl ActionComposer<FsProbe> {
    pub fn new(engine: Arc<dyn QueryEngine>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_resolver(WorkspaceRootResolver::new(), engine, notifier)
    }

    pub fn from_settings(
        settings: &Settings,
        engine: Arc<dyn QueryEngine>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_resolver(WorkspaceRootResolver::from_settings(settings), engine, notifier)
            .with_query_options(settings.query_options.clone())
            .with_test_rule_suffix(settings.test_rule_suffix.clone())
    }
}

impl<P: PathProbe> ActionComposer<P> {
    pub fn with_resolver(
        resolver: WorkspaceRootResolver<P>,
        engine: Arc<dyn QueryEngine>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            resolver,
            engine,
            notifier,
            query_options: Vec::new(),
            test_rule_suffix: DEFAULT_TEST_RULE_SUFFIX.to_string(),
        }
    }

    pub fn with_query_options(mut self, options: Vec<String>) -> Self {
        self.query_options = options;
        self
    }

    pub fn with_test_rule_suffix(mut self, suffix: String) -> Self {
        self.test_rule_suffix = suffix;
        self
    }

    /// Build the actions for the BUILD file at `document` (absolute path).
    ///
    /// A document outside any workspace yields an empty list and one warning.
    /// Query failures are returned as-is. If `cancel` fires while the query
    /// is running, the query is dropped and [`Error::Cancelled`] is returned.
    pub async fn compose(
        &self,
        document: &Path,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<CommandDescriptor>> {
        tracing::debug!("compose: document={:?}", document);
        let document = normalize(document);

        let Some(root) = self.resolver.resolve(&document) else {
            self.notifier.warn(NOT_IN_WORKSPACE_WARNING);
            return Ok(Vec::new());
        };

        // The root is an ancestor of the document, so this only fails on odd paths
        let Some(package) = package_label(&root, &document) else {
            self.notifier.warn(NOT_IN_WORKSPACE_WARNING);
            return Ok(Vec::new());
        };

        let expression = rules_in_package(&package);
        tracing::debug!("Querying {} in {:?}", expression, root);

        let query = self
            .engine
            .run_query(&root, &expression, &self.query_options);
        let result = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(Error::Cancelled),
                result = query => result?,
            },
            None => query.await?,
        };

        let descriptors: Vec<CommandDescriptor> = result
            .rules
            .iter()
            .map(|rule| CommandDescriptor::from_rule(rule, &root, &self.test_rule_suffix))
            .collect();

        tracing::debug!("Composed {} actions for {}", descriptors.len(), package);
        Ok(descriptors)
    }
}

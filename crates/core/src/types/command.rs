use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::location::QueryLocation;
use super::position::SourceRange;
use super::rule::RuleRecord;

/// What a descriptor asks the execution layer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Build,
    Test,
}

impl ActionKind {
    /// Classify a rule by its class name. Anything not ending in `test_suffix` builds.
    pub fn classify(rule_class: &str, test_suffix: &str) -> Self {
        if rule_class.ends_with(test_suffix) {
            ActionKind::Test
        } else {
            ActionKind::Build
        }
    }

    /// Host command identifier bound to this kind
    pub fn command_id(&self) -> &'static str {
        match self {
            ActionKind::Build => "bazel.buildTarget",
            ActionKind::Test => "bazel.testTarget",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            ActionKind::Build => "Build",
            ActionKind::Test => "Test",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Arguments handed to the execution layer.
///
/// Build and test share this shape; consumers tell them apart by [`ActionKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandArguments {
    pub working_directory: PathBuf,
    pub options: Vec<String>,
}

impl CommandArguments {
    /// Arguments targeting a single label
    pub fn for_target(working_directory: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            working_directory: working_directory.into(),
            options: vec![label.into()],
        }
    }
}

/// An actionable "run this kind of command against this target from this directory"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
    pub title: String,
    pub action_kind: ActionKind,
    pub command: String,
    pub arguments: CommandArguments,
    pub anchor: QueryLocation,
}

impl CommandDescriptor {
    pub fn from_rule(
        rule: &RuleRecord,
        working_directory: impl Into<PathBuf>,
        test_suffix: &str,
    ) -> Self {
        let action_kind = ActionKind::classify(&rule.rule_class, test_suffix);
        Self {
            title: format!("{} {}", action_kind.verb(), rule.name),
            action_kind,
            command: action_kind.command_id().to_string(),
            arguments: CommandArguments::for_target(working_directory, rule.name.clone()),
            anchor: rule.location.clone(),
        }
    }

    /// Editor range the action is rendered at
    pub fn range(&self) -> SourceRange {
        self.anchor.range()
    }
}

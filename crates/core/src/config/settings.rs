use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bazel-lens.json";
pub const EXECUTABLE_ENV_VAR: &str = "BAZEL_LENS_BAZEL";

pub const DEFAULT_ROOT_MARKER: &str = "WORKSPACE";
pub const DEFAULT_TEST_RULE_SUFFIX: &str = "_test";
pub const DEFAULT_MAX_WALK_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Settings {
    /// Program used to run queries
    pub bazel_executable: String,

    /// Extra arguments appended to every query invocation
    pub query_options: Vec<String>,

    /// File names marking a workspace root; any one of them matches
    pub root_markers: Vec<String>,

    /// Rule classes ending with this suffix get a test action
    pub test_rule_suffix: String,

    /// Upper bound on parent hops while searching for the workspace root
    pub max_walk_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bazel_executable: "bazel".to_string(),
            query_options: Vec::new(),
            root_markers: vec![DEFAULT_ROOT_MARKER.to_string()],
            test_rule_suffix: DEFAULT_TEST_RULE_SUFFIX.to_string(),
            max_walk_depth: DEFAULT_MAX_WALK_DEPTH,
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(settings)
    }

    /// Settings that apply to `document`: the nearest config file walking up
    /// from its directory, then environment overrides.
    pub fn load_for(document: &Path) -> Result<Self> {
        let start = document.parent().unwrap_or(document);
        let settings = match Self::find_config_file(start) {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                Self::load_from_file(&path)?
            }
            None => Self::default(),
        };
        Ok(settings.with_executable_override(std::env::var(EXECUTABLE_ENV_VAR).ok()))
    }

    pub fn with_executable_override(mut self, executable: Option<String>) -> Self {
        if let Some(executable) = executable.filter(|e| !e.trim().is_empty()) {
            self.bazel_executable = executable;
        }
        self
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }
}

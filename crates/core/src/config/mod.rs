//! Configuration management for bazel-lens

mod settings;

pub use settings::{
    CONFIG_FILE_NAME, DEFAULT_MAX_WALK_DEPTH, DEFAULT_ROOT_MARKER, DEFAULT_TEST_RULE_SUFFIX,
    EXECUTABLE_ENV_VAR, Settings,
};

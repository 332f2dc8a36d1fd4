use std::io;

/// Errors that can occur while composing BUILD file actions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to spawn `{program}`: {source}")]
    QuerySpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Bazel query exited with {}: {stderr}", exit_code_display(.code))]
    QueryExit { code: Option<i32>, stderr: String },

    #[error("Malformed query output on line {line}: {source}")]
    QueryOutput {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Query cancelled")]
    Cancelled,
}

impl Error {
    /// Whether this error came out of the query collaborator
    pub fn is_query_failure(&self) -> bool {
        matches!(
            self,
            Error::QuerySpawn { .. } | Error::QueryExit { .. } | Error::QueryOutput { .. }
        )
    }
}

fn exit_code_display(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Result type alias for bazel-lens operations
pub type Result<T> = std::result::Result<T, Error>;

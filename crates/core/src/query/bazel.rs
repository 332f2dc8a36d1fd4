use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use super::QueryEngine;
use super::output::parse_streamed_jsonproto;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::types::QueryResult;

const OUTPUT_FORMAT: &str = "--output=streamed_jsonproto";

/// Query engine that shells out to `bazel query`
#[derive(Debug, Clone)]
pub struct BazelQuery {
    executable: String,
}

impl BazelQuery {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.bazel_executable.clone())
    }

    fn build_args(expression: &str, extra_args: &[String]) -> Vec<String> {
        let mut args = vec![
            "query".to_string(),
            expression.to_string(),
            OUTPUT_FORMAT.to_string(),
        ];
        args.extend(extra_args.iter().cloned());
        args
    }
}

impl Default for BazelQuery {
    fn default() -> Self {
        Self::new("bazel")
    }
}

#[async_trait]
impl QueryEngine for BazelQuery {
    async fn run_query(
        &self,
        working_directory: &Path,
        expression: &str,
        extra_args: &[String],
    ) -> Result<QueryResult> {
        let args = Self::build_args(expression, extra_args);
        tracing::debug!(
            "Running {} {} in {}",
            self.executable,
            args.join(" "),
            working_directory.display()
        );

        let output = Command::new(&self.executable)
            .args(&args)
            .current_dir(working_directory)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| Error::QuerySpawn {
                program: self.executable.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::QueryExit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let result = parse_streamed_jsonproto(&stdout)?;
        tracing::debug!("Query returned {} rules", result.rules.len());
        Ok(result)
    }
}

//! Bazel query collaborator

mod bazel;
mod output;

pub use bazel::BazelQuery;
pub use output::parse_streamed_jsonproto;

use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;
use crate::types::QueryResult;

/// Runs a query expression against a workspace and returns the rules it matched
#[async_trait]
pub trait QueryEngine: Send + Sync {
    async fn run_query(
        &self,
        working_directory: &Path,
        expression: &str,
        extra_args: &[String],
    ) -> Result<QueryResult>;
}

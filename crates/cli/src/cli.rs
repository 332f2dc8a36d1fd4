use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{label_command, lens_command, root_command};

#[derive(Parser, Debug)]
#[command(name = "bazel-lens")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug          Enable debug logging\n    BAZEL_LENS_BAZEL=<bin>  Use <bin> instead of `bazel` for queries")]
pub struct Lens {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the build and test actions for a BUILD file
    #[command(visible_alias = "l")]
    Lens {
        /// Path to the BUILD file
        filepath: String,

        /// Print the actions as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Print the Bazel workspace root a file belongs to
    Root {
        /// Path to a file inside the workspace
        filepath: String,
    },
    /// Print the package label of a BUILD file
    Label {
        /// Path to the BUILD file
        filepath: String,
    },
}

impl Commands {
    pub async fn execute(self) -> Result<()> {
        match self {
            Commands::Lens { filepath, json } => lens_command(&filepath, json).await,
            Commands::Root { filepath } => root_command(&filepath),
            Commands::Label { filepath } => label_command(&filepath),
        }
    }
}

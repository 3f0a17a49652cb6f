//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved anchor paths
    Paths,

    /// Run startup registration and show where each dependency resolved
    Locate,

    /// Create every anchor and workspace directory that is missing
    Provision {
        /// Options file (JSON) holding the workspace directory settings
        #[arg(long, env = "SDPATHS_OPTIONS_FILE")]
        options: PathBuf,

        /// Persist rewritten relative values back to the options file
        #[arg(long)]
        write_back: bool,
    },
}

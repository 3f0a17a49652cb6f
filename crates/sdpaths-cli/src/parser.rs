//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use sdpaths_core::AnchorOverrides;

use crate::commands::Commands;

/// Command-line interface for inspecting and provisioning a host layout.
///
/// Root flags win over `SDPATHS_*` environment variables, which win over the
/// built-in resolution.
#[derive(Parser)]
#[command(name = "sdpaths")]
#[command(about = "Resolve, register and provision host directories")]
#[command(version)]
pub struct Cli {
    /// Application root (where `repositories/` lives)
    #[arg(long = "script-dir", global = true)]
    pub script_dir: Option<String>,

    /// Writable data root
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Override the models directory for this invocation
    #[arg(long = "models-dir", global = true)]
    pub models_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Root overrides given on the command line.
    pub fn anchor_overrides(&self) -> AnchorOverrides<'_> {
        AnchorOverrides {
            script_dir: self.script_dir.as_deref(),
            data_dir: self.data_dir.as_deref(),
            models_dir: self.models_dir.as_deref(),
        }
    }

    /// Default filter directive when `RUST_LOG` is unset.
    pub const fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "sdpaths",
            "--verbose",
            "--script-dir",
            "/srv/app",
            "locate",
            "--models-dir",
            "/mnt/models",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.default_log_level(), "debug");

        let overrides = cli.anchor_overrides();
        assert_eq!(overrides.script_dir, Some("/srv/app"));
        assert_eq!(overrides.data_dir, None);
        assert_eq!(overrides.models_dir, Some("/mnt/models"));
        assert!(matches!(cli.command, Some(Commands::Locate)));
    }

    #[test]
    fn test_provision_args() {
        let cli = Cli::parse_from([
            "sdpaths",
            "provision",
            "--options",
            "config.json",
            "--write-back",
        ]);
        assert_eq!(cli.default_log_level(), "info");

        let Some(Commands::Provision {
            options,
            write_back,
        }) = cli.command
        else {
            panic!("expected provision command");
        };
        assert_eq!(options, std::path::PathBuf::from("config.json"));
        assert!(write_back);
    }

    #[test]
    fn test_provision_requires_options_file() {
        let result = Cli::try_parse_from(["sdpaths", "provision"]);
        // SDPATHS_OPTIONS_FILE may satisfy the requirement in a dev shell.
        if std::env::var_os("SDPATHS_OPTIONS_FILE").is_none() {
            assert!(result.is_err());
        }
    }
}

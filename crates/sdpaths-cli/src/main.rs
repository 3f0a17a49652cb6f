//! CLI entry point.
//!
//! Loads `.env`, installs the tracing subscriber, and dispatches to handlers.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use sdpaths_cli::{Cli, CliError, Commands, handlers};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let overrides = cli.anchor_overrides();
    match command {
        Commands::Paths => handlers::paths::execute(&overrides)?,
        Commands::Locate => handlers::locate::execute(&overrides)?,
        Commands::Provision {
            options,
            write_back,
        } => handlers::provision::execute(&overrides, options, *write_back)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.default_log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

//! Locate command handler.
//!
//! Runs the same startup registration the host runs and reports the outcome.

use std::fmt::Write as _;

use sdpaths_core::{
    AnchorOverrides, FsModuleLoader, PathAnchors, Registrar, Startup, StartupConfig,
    TracingLogSink, bootstrap,
};
use tracing::debug;

use crate::error::CliError;

/// Execute the locate command.
pub fn execute(overrides: &AnchorOverrides<'_>) -> Result<(), CliError> {
    let anchors = PathAnchors::resolve(overrides)?;
    let config = StartupConfig::for_anchors(&anchors)?;
    let startup = run_startup(config)?;
    print!("{}", render(&startup.registrar));
    Ok(())
}

/// Startup registration with the filesystem loader and tracing sink.
pub fn run_startup(config: StartupConfig) -> Result<Startup, CliError> {
    debug!(script_path = %config.script_path.display(), "Running startup registration");
    Ok(bootstrap(config, FsModuleLoader::new(), Some(&TracingLogSink))?)
}

/// Resolved dependencies as `label = dir`, then the search order front first.
pub fn render(registrar: &Registrar) -> String {
    let mut out = String::new();

    for (label, dir) in registrar.resolved().iter() {
        let _ = writeln!(out, "{label} = {}", dir.display());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "search order:");
    for (index, dir) in registrar.search_order().iter().enumerate() {
        let _ = writeln!(out, "  {index}: {}", dir.display());
    }

    out
}

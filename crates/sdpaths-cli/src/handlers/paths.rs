//! Paths command handler.
//!
//! Displays every resolved anchor for diagnostics. This is the "golden truth"
//! tool for path resolution issues.

use sdpaths_core::{AnchorOverrides, PathAnchors};

use crate::error::CliError;

/// Execute the paths command.
///
/// Prints anchors in `key = value` format, including where each root came
/// from.
pub fn execute(overrides: &AnchorOverrides<'_>) -> Result<(), CliError> {
    let anchors = PathAnchors::resolve(overrides)?;
    println!("{anchors}");
    Ok(())
}

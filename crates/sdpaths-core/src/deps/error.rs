//! Dependency location and registration errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::paths::PathError;

/// Errors raised while locating dependency trees or using the registrar.
#[derive(Debug, Error)]
pub enum DependencyError {
    /// The foundational source tree is absent from every candidate location.
    ///
    /// Fatal: startup must not continue without it.
    #[error("Couldn't find {label} in any of: {}", display_list(.candidates))]
    BaseTreeNotFound {
        label: String,
        candidates: Vec<PathBuf>,
    },

    /// A priority scope was requested for a label that was never located.
    #[error("No dependency located under label {0:?}")]
    UnknownDependency(String),

    /// A module could not be found along the search order.
    #[error("Module {name} not found in any of: {}", display_list(.searched))]
    ModuleNotFound { name: String, searched: Vec<PathBuf> },

    /// Anchor or working directory resolution failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

fn display_list(paths: &[PathBuf]) -> String {
    let rendered: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

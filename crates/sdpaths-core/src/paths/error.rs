//! Path-related error types.
//!
//! Provides semantic errors for anchor resolution and workspace path
//! normalization without exposing adapter-specific concerns.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution and normalization.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Could not determine where the running executable lives.
    #[error("Cannot determine executable location: {0}")]
    NoExecutableDir(String),

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),

    /// A workspace option has neither a live value nor a declared default.
    #[error("Unknown option {0}: no value and no declared default")]
    UnknownOption(String),

    /// Failed to read or write an options file.
    #[error("Failed to access options file {path}: {reason}")]
    OptionsFileError { path: PathBuf, reason: String },
}

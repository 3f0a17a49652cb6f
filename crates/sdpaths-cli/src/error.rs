//! CLI-specific error types and mappings.
//!
//! Maps library errors to exit codes and user-facing messages.

use sdpaths_core::{DependencyError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Startup registration failed.
    #[error("{0}")]
    Dependency(String),

    /// Argument or option error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Dependency(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::OptionsFileError { .. } => Self::Io(err.to_string()),
            PathError::UnknownOption(_) | PathError::EmptyPath => Self::Arguments(err.to_string()),
            PathError::NoHomeDir | PathError::NoExecutableDir(_) | PathError::CurrentDirError(_) => {
                Self::Config(err.to_string())
            }
        }
    }
}

impl From<DependencyError> for CliError {
    fn from(err: DependencyError) -> Self {
        match err {
            DependencyError::Path(path_err) => path_err.into(),
            DependencyError::UnknownDependency(_) => Self::Arguments(err.to_string()),
            DependencyError::BaseTreeNotFound { .. } | DependencyError::ModuleNotFound { .. } => {
                Self::Dependency(err.to_string())
            }
        }
    }
}

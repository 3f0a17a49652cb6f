//! Path utilities: anchors, normalization and workspace provisioning.
//!
//! This module provides the canonical path resolution for the host:
//! - Path anchors (script root, data root and everything derived from them)
//! - Workspace option normalization against the data and application roots
//! - Best-effort creation of the workspace directory checklist
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Path arithmetic is lexical; only existence checks touch the filesystem
//! - OS-specific logic is kept private in `platform`

mod anchors;
mod error;
mod lexical;
mod normalize;
mod platform;
mod provision;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Anchors and root detection
pub use anchors::{AnchorOverrides, DEFAULT_CONFIG_FILE, DEFAULT_MODEL_FILE, PathAnchors};
pub use platform::{
    DATA_DIR_ENV, MODELS_DIR_ENV, RootResolution, RootSource, SCRIPT_DIR_ENV, resolve_data_root,
    resolve_models_override, resolve_script_root,
};
pub(crate) use platform::current_dir;

// Lexical helpers
pub use lexical::{absolutize, normalize_lexically, relative_to};

// Normalization and provisioning
pub use normalize::PathNormalizer;
pub use provision::{ProvisionReport, create_paths, create_paths_with, provision};

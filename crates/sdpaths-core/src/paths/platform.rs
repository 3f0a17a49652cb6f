//! Platform-specific root detection.
//!
//! This module contains private helpers for detecting the runtime environment
//! (local checkout vs installed binary) and resolving the script and data
//! roots. Public API is exposed through `anchors`.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::lexical::absolutize;

/// Environment variable overriding the application (script) root.
pub const SCRIPT_DIR_ENV: &str = "SDPATHS_SCRIPT_DIR";

/// Environment variable overriding the base data directory.
pub const DATA_DIR_ENV: &str = "SDPATHS_DATA_DIR";

/// Environment variable overriding the models directory.
pub const MODELS_DIR_ENV: &str = "SDPATHS_MODELS_DIR";

/// How a root directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// The caller passed an explicit path (e.g., CLI flag).
    Explicit,
    /// The path came from an environment variable / `.env`.
    EnvVar,
    /// The local source checkout this binary was built from.
    LocalRepo,
    /// The directory holding the running executable.
    Executable,
    /// Derived from another anchor (e.g. data root defaults to script root).
    Derived,
}

/// Resolution result for a single root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootResolution {
    /// The resolved, absolute path.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: RootSource,
}

/// Detect if we are running from the local checkout.
///
/// Returns `Some(path)` in debug builds, and in release builds whose
/// executable lives inside the checkout they were built from.
#[allow(clippy::unnecessary_wraps)] // Option is needed for release builds
pub(super) fn detect_local_repo() -> Option<PathBuf> {
    let repo_root = PathBuf::from(env!("SDPATHS_REPO_ROOT"));

    #[cfg(debug_assertions)]
    {
        Some(repo_root)
    }

    #[cfg(not(debug_assertions))]
    {
        if !repo_root.join("Cargo.toml").exists() {
            return None;
        }

        let canonical_exe = env::current_exe().ok()?.canonicalize().ok()?;
        let canonical_repo = repo_root.canonicalize().ok()?;
        canonical_exe
            .starts_with(&canonical_repo)
            .then_some(repo_root)
    }
}

/// Resolve the application root the dependency candidates are relative to.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `SDPATHS_SCRIPT_DIR` environment variable
/// 3. Local checkout (if running from source)
/// 4. Directory of the running executable
pub fn resolve_script_root(explicit: Option<&str>) -> Result<RootResolution, PathError> {
    if let Some(resolution) = from_explicit_or_env(explicit, SCRIPT_DIR_ENV)? {
        return Ok(resolution);
    }

    if let Some(repo) = detect_local_repo() {
        return Ok(RootResolution {
            path: repo,
            source: RootSource::LocalRepo,
        });
    }

    let exe = env::current_exe().map_err(|e| PathError::NoExecutableDir(e.to_string()))?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| PathError::NoExecutableDir(exe.display().to_string()))?;

    Ok(RootResolution {
        path: dir,
        source: RootSource::Executable,
    })
}

/// Resolve the base data directory.
///
/// Resolution order:
/// 1. Explicit path provided by caller
/// 2. `SDPATHS_DATA_DIR` environment variable
/// 3. The script root
pub fn resolve_data_root(
    explicit: Option<&str>,
    script_root: &Path,
) -> Result<RootResolution, PathError> {
    if let Some(resolution) = from_explicit_or_env(explicit, DATA_DIR_ENV)? {
        return Ok(resolution);
    }

    Ok(RootResolution {
        path: script_root.to_path_buf(),
        source: RootSource::Derived,
    })
}

/// Resolve an optional models directory override (`None` = use the default).
pub fn resolve_models_override(explicit: Option<&str>) -> Result<Option<RootResolution>, PathError> {
    from_explicit_or_env(explicit, MODELS_DIR_ENV)
}

fn from_explicit_or_env(
    explicit: Option<&str>,
    env_key: &str,
) -> Result<Option<RootResolution>, PathError> {
    if let Some(path_str) = explicit {
        return Ok(Some(RootResolution {
            path: normalize_user_path(path_str)?,
            source: RootSource::Explicit,
        }));
    }

    if let Ok(env_path) = env::var(env_key) {
        if !env_path.trim().is_empty() {
            return Ok(Some(RootResolution {
                path: normalize_user_path(&env_path)?,
                source: RootSource::EnvVar,
            }));
        }
    }

    Ok(None)
}

/// The process working directory.
pub(crate) fn current_dir() -> Result<PathBuf, PathError> {
    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    Ok(absolutize(&expanded, &current_dir()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn explicit_script_root_beats_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(SCRIPT_DIR_ENV, "/tmp/from-env");

        let resolved = resolve_script_root(Some("/tmp/explicit")).unwrap();
        assert_eq!(resolved.source, RootSource::Explicit);
        assert_eq!(resolved.path, PathBuf::from("/tmp/explicit"));
    }

    #[test]
    fn env_script_root_is_used_when_no_explicit_value() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(SCRIPT_DIR_ENV, "/tmp/from-env/");

        let resolved = resolve_script_root(None).unwrap();
        assert_eq!(resolved.source, RootSource::EnvVar);
        assert_eq!(resolved.path, PathBuf::from("/tmp/from-env"));
    }

    #[test]
    fn blank_env_value_falls_through_to_local_repo() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(SCRIPT_DIR_ENV, "   ");

        let resolved = resolve_script_root(None).unwrap();
        // Test builds are debug builds, which always use the checkout.
        assert_eq!(resolved.source, RootSource::LocalRepo);
    }

    #[test]
    fn data_root_defaults_to_script_root() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::unset(DATA_DIR_ENV);

        let resolved = resolve_data_root(None, Path::new("/srv/app")).unwrap();
        assert_eq!(resolved.source, RootSource::Derived);
        assert_eq!(resolved.path, PathBuf::from("/srv/app"));
    }

    #[test]
    fn empty_explicit_path_is_rejected() {
        assert!(matches!(normalize_user_path("  "), Err(PathError::EmptyPath)));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("home dir");
        assert_eq!(normalize_user_path("~/models").unwrap(), home.join("models"));
    }
}

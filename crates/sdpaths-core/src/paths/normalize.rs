//! Workspace path normalization.
//!
//! Turns an option's live value (or declared default) into the directory to
//! create. Values stay portable (relative to the application root) when
//! possible, but absolute values that already point at real data are left
//! alone.

use std::path::PathBuf;

use super::anchors::PathAnchors;
use super::error::PathError;
use super::lexical::relative_to;
use super::platform::current_dir;
use crate::options::Options;

/// Resolves workspace option values against the data and application roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNormalizer {
    data_root: PathBuf,
    app_root: PathBuf,
    working_dir: PathBuf,
}

impl PathNormalizer {
    pub fn new(data_root: impl Into<PathBuf>, app_root: impl Into<PathBuf>) -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root.into(),
            app_root: app_root.into(),
            working_dir: current_dir()?,
        })
    }

    /// Normalizer over the anchors' data and script roots.
    pub fn for_anchors(anchors: &PathAnchors) -> Result<Self, PathError> {
        Self::new(anchors.data_path(), anchors.script_path())
    }

    /// Resolve relative paths against `working_dir` instead of the process
    /// working directory.
    #[must_use]
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    /// Effective directory for `key`, or `None` when the option is empty
    /// (feature disabled).
    ///
    /// Only the relative-rewrite branch writes back into `options`.
    pub fn normalize(&self, key: &str, options: &mut Options) -> Result<Option<PathBuf>, PathError> {
        let target = options.effective(key)?.to_string();
        if target.is_empty() {
            return Ok(None);
        }

        let data_root = self.data_root.to_string_lossy();
        let has_data_root = !data_root.is_empty();

        if has_data_root && target.starts_with(&*data_root) {
            return Ok(Some(PathBuf::from(target)));
        }

        let full = self.data_root.join(&target);
        if has_data_root && self.data_root.is_absolute() {
            return Ok(Some(full));
        }

        if full.is_absolute() && full.exists() {
            return Ok(Some(full));
        }

        // Different roots (e.g. another drive) cannot be expressed relatively.
        let rewritten = relative_to(&full, &self.app_root, &self.working_dir).unwrap_or(full);
        options.set(key, rewritten.to_string_lossy());
        Ok(Some(rewritten))
    }
}

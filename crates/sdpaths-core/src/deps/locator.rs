//! Dependency locator: which candidate trees are present on disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::catalog::BaseTreeSpec;
use super::error::DependencyError;
use super::spec::{DependencySpec, LocatedDependency, ResolvedDependency};
use crate::paths::{PathError, absolutize, current_dir};
use crate::ports::LogSink;

/// Locates dependency trees relative to a base directory.
///
/// A missing marker is a degraded-capability signal, not an error: the
/// locator warns through its sink (if any) and skips the spec.
pub struct DependencyLocator<'a> {
    base_dir: PathBuf,
    working_dir: PathBuf,
    sink: Option<&'a dyn LogSink>,
}

impl<'a> DependencyLocator<'a> {
    /// Locator resolving relative paths against the process working directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, PathError> {
        Ok(Self {
            base_dir: base_dir.into(),
            working_dir: current_dir()?,
            sink: None,
        })
    }

    /// Use `working_dir` instead of the process working directory.
    #[must_use]
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn LogSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Locate every spec, preserving spec order in the output.
    pub fn locate(&self, specs: &[DependencySpec]) -> Vec<LocatedDependency> {
        specs.iter().filter_map(|spec| self.locate_one(spec)).collect()
    }

    /// Locate a single spec.
    pub fn locate_one(&self, spec: &DependencySpec) -> Option<LocatedDependency> {
        let marker = absolutize(
            &self
                .base_dir
                .join(spec.candidate_dir())
                .join(spec.marker()),
            &self.working_dir,
        );

        if !marker.exists() {
            if let Some(sink) = self.sink {
                sink.warning(&format!(
                    "{} not found at path {}",
                    spec.label(),
                    marker.display()
                ));
            }
            return None;
        }

        let directory = absolutize(spec.candidate_dir(), &self.working_dir);
        debug!(label = spec.label(), dir = %directory.display(), "Located dependency");

        Some(LocatedDependency {
            resolved: ResolvedDependency {
                label: spec.label().to_string(),
                directory,
            },
            options: spec.options(),
            package: spec.package_name(),
        })
    }
}

/// Find the mandatory base tree: the first candidate containing the marker.
pub fn locate_base_tree(spec: &BaseTreeSpec, working_dir: &Path) -> Result<PathBuf, DependencyError> {
    spec.candidates
        .iter()
        .find(|candidate| absolutize(&candidate.join(&spec.marker), working_dir).exists())
        .map(|candidate| absolutize(candidate, working_dir))
        .ok_or_else(|| DependencyError::BaseTreeNotFound {
            label: spec.label.clone(),
            candidates: spec.candidates.clone(),
        })
}

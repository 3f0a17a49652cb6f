//! Dependency descriptions and resolution results.

use std::path::{Component, Path, PathBuf};

use bitflags::bitflags;

bitflags! {
    /// Registration options of a dependency tree.
    ///
    /// With no flag set the tree is appended to the end of the search order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[repr(transparent)]
    pub struct DependencyOptions: u8 {
        /// Insert at the front of the search order.
        const AT_START = 0b0000_0001;

        /// Namespace-conflict suppression: put the tree in front, cache its
        /// top-level package, then take the tree back out of the order.
        const SGM      = 0b0000_0010;
    }
}

/// Where a located dependency goes in the search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Lowest priority, after everything already registered.
    Append,
    /// Highest priority.
    Front,
    /// Front for exactly one cached import, then evicted.
    CacheThenEvict,
}

impl DependencyOptions {
    /// Placement implied by these options. `AT_START` wins over `SGM`.
    pub const fn placement(self) -> Placement {
        if self.contains(Self::AT_START) {
            Placement::Front
        } else if self.contains(Self::SGM) {
            Placement::CacheThenEvict
        } else {
            Placement::Append
        }
    }
}

/// A candidate dependency tree, defined once at startup.
///
/// The existence marker is evaluated relative to the candidate directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    candidate_dir: PathBuf,
    marker: PathBuf,
    label: String,
    options: DependencyOptions,
    package: Option<String>,
}

impl DependencySpec {
    pub fn new(
        candidate_dir: impl Into<PathBuf>,
        marker: impl Into<PathBuf>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            candidate_dir: candidate_dir.into(),
            marker: marker.into(),
            label: label.into(),
            options: DependencyOptions::empty(),
            package: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: DependencyOptions) -> Self {
        self.options = options;
        self
    }

    /// Name the top-level package cached by `SGM` registration explicitly.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn candidate_dir(&self) -> &Path {
        &self.candidate_dir
    }

    pub fn marker(&self) -> &Path {
        &self.marker
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn options(&self) -> DependencyOptions {
        self.options
    }

    /// Top-level package of the tree.
    ///
    /// Defaults to the stem of the marker's first segment, so a marker of
    /// `k_diffusion/sampling.py` names `k_diffusion` and `sgm` names `sgm`.
    pub fn package_name(&self) -> String {
        if let Some(package) = &self.package {
            return package.clone();
        }

        self.marker
            .components()
            .find_map(|c| match c {
                Component::Normal(part) => Some(Path::new(part)),
                _ => None,
            })
            .and_then(Path::file_stem)
            .map_or_else(|| self.label.clone(), |s| s.to_string_lossy().into_owned())
    }
}

/// A dependency whose marker exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub label: String,
    /// Absolute form of the candidate directory.
    pub directory: PathBuf,
}

/// Locator output: the resolution plus what registration needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedDependency {
    pub resolved: ResolvedDependency,
    pub options: DependencyOptions,
    pub package: String,
}

//! Label → absolute directory of every located dependency.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::spec::ResolvedDependency;

/// Located dependencies, in registration order. Labels are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDependencies {
    by_label: IndexMap<String, PathBuf>,
}

impl ResolvedDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dependency. A repeated label keeps its position and takes
    /// the new directory.
    pub fn insert(&mut self, resolved: ResolvedDependency) {
        self.by_label.insert(resolved.label, resolved.directory);
    }

    pub fn get(&self, label: &str) -> Option<&Path> {
        self.by_label.get(label).map(PathBuf::as_path)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.by_label
            .iter()
            .map(|(label, dir)| (label.as_str(), dir.as_path()))
    }
}

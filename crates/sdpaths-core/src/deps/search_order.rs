//! The module search order: directories consulted front to back.

use std::path::{Path, PathBuf};

/// Ordered directories consulted by the module loader; first match wins.
///
/// Only the [`Registrar`](super::Registrar) mutates the live order. Clones
/// are plain snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSearchOrder {
    entries: Vec<PathBuf>,
}

impl ModuleSearchOrder {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert at index 0 (highest priority).
    pub fn prepend(&mut self, dir: impl Into<PathBuf>) {
        self.entries.insert(0, dir.into());
    }

    /// Insert at the end (lowest priority).
    pub fn append(&mut self, dir: impl Into<PathBuf>) {
        self.entries.push(dir.into());
    }

    /// Remove and return index 0.
    pub fn pop_front(&mut self) -> Option<PathBuf> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Remove every occurrence of `dir`. Returns whether anything was removed.
    pub fn remove(&mut self, dir: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != dir);
        self.entries.len() != before
    }

    pub fn first(&self) -> Option<&Path> {
        self.entries.first().map(PathBuf::as_path)
    }

    pub fn last(&self) -> Option<&Path> {
        self.entries.last().map(PathBuf::as_path)
    }

    pub fn position(&self, dir: &Path) -> Option<usize> {
        self.entries.iter().position(|entry| entry == dir)
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.position(dir).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.entries
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for ModuleSearchOrder {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_and_append_set_priority() {
        let mut order: ModuleSearchOrder = ["/host"].into_iter().collect();
        order.prepend("/front");
        order.append("/back");

        assert_eq!(order.first(), Some(Path::new("/front")));
        assert_eq!(order.last(), Some(Path::new("/back")));
        assert_eq!(order.position(Path::new("/host")), Some(1));
    }

    #[test]
    fn pop_front_on_empty_order_is_none() {
        let mut order = ModuleSearchOrder::new();
        assert_eq!(order.pop_front(), None);
    }

    #[test]
    fn remove_drops_every_occurrence() {
        let mut order: ModuleSearchOrder = ["/a", "/b", "/a"].into_iter().collect();
        assert!(order.remove(Path::new("/a")));
        assert_eq!(order.as_slice(), &[PathBuf::from("/b")]);
        assert!(!order.remove(Path::new("/missing")));
    }
}

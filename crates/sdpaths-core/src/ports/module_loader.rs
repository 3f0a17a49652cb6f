//! Module loader port.
//!
//! Abstracts the host runtime's "find this module along the search order"
//! step, so the registrar can cache a module under its name without knowing
//! how modules are laid out on disk.

use std::path::PathBuf;

/// Locates a module by its dotted name along a search order.
pub trait ModuleLoader: Send + Sync {
    /// Return the origin of the first match, scanning `search_order` front to
    /// back, or `None` when no directory provides `name`.
    fn find(&self, name: &str, search_order: &[PathBuf]) -> Option<PathBuf>;
}

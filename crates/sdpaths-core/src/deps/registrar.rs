//! Search-order registrar.
//!
//! The registrar owns the module search order, the module registry and the
//! resolved-dependency mapping, and is the only thing allowed to mutate
//! them. Mutations are visible immediately; there is no commit step.

use std::path::{Path, PathBuf};

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use super::error::DependencyError;
use super::priority::PriorityGuard;
use super::registry::{ModuleEntry, ModuleRegistry, ModuleStub};
use super::resolved::ResolvedDependencies;
use super::search_order::ModuleSearchOrder;
use super::spec::{LocatedDependency, Placement};
use crate::ports::ModuleLoader;

pub struct Registrar {
    search_order: ModuleSearchOrder,
    modules: ModuleRegistry,
    resolved: ResolvedDependencies,
    loader: Box<dyn ModuleLoader>,
}

impl std::fmt::Debug for Registrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registrar")
            .field("search_order", &self.search_order)
            .field("modules", &self.modules)
            .field("resolved", &self.resolved)
            .finish_non_exhaustive()
    }
}

impl Registrar {
    /// Take ownership of the host's initial search order.
    pub fn new(search_order: ModuleSearchOrder, loader: impl ModuleLoader + 'static) -> Self {
        Self {
            search_order,
            modules: ModuleRegistry::new(),
            resolved: ResolvedDependencies::new(),
            loader: Box::new(loader),
        }
    }

    pub const fn search_order(&self) -> &ModuleSearchOrder {
        &self.search_order
    }

    pub const fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    pub const fn resolved(&self) -> &ResolvedDependencies {
        &self.resolved
    }

    /// Absolute directory of a located dependency.
    pub fn dependency_dir(&self, label: &str) -> Option<&Path> {
        self.resolved.get(label)
    }

    /// Put `dir` at the front of the search order.
    pub fn prepend_dir(&mut self, dir: impl Into<PathBuf>) {
        self.search_order.prepend(dir);
    }

    /// Install a placeholder module, overwriting any prior entry of that name.
    ///
    /// Call before locating dependencies so their own imports of `name` hit
    /// the stub.
    pub fn install_stub(&mut self, name: impl Into<String>, attributes: BTreeMap<String, Value>) {
        let name = name.into();
        debug!(module = %name, "Installing module stub");
        self.modules.install_stub(ModuleStub { name, attributes });
    }

    pub fn install_stubs(&mut self, stubs: impl IntoIterator<Item = ModuleStub>) {
        for stub in stubs {
            self.install_stub(stub.name, stub.attributes);
        }
    }

    /// Insert a located dependency into the search order and record it.
    ///
    /// `SGM` dependencies are placed in front only long enough to cache their
    /// top-level package, and are gone from the order when this returns. If
    /// that import fails the directory is still removed and the error is
    /// returned; at startup the caller treats it as fatal.
    pub fn register(&mut self, located: LocatedDependency) -> Result<(), DependencyError> {
        let LocatedDependency {
            resolved,
            options,
            package,
        } = located;
        let dir = resolved.directory.clone();

        match options.placement() {
            Placement::Front => self.search_order.prepend(dir),
            Placement::Append => self.search_order.append(dir),
            Placement::CacheThenEvict => {
                self.search_order.prepend(dir);
                let cached = self.cache_module_under_name(&package).map(|_| ());
                self.search_order.pop_front();
                cached?;
            }
        }

        debug!(
            label = %resolved.label,
            dir = %resolved.directory.display(),
            placement = ?options.placement(),
            "Registered dependency"
        );
        self.resolved.insert(resolved);
        Ok(())
    }

    /// Load `name` once along the current order and keep it in the registry,
    /// so it stays importable after its directory leaves the search order.
    pub fn cache_module_under_name(&mut self, name: &str) -> Result<&ModuleEntry, DependencyError> {
        debug!(module = name, "Caching module under its name");
        self.import(name)
    }

    /// Remove every occurrence of `dir` from the search order.
    pub fn exclude_directory_from_search(&mut self, dir: &Path) -> bool {
        self.search_order.remove(dir)
    }

    /// Import `name`: the registry first, then the live search order.
    ///
    /// A hit along the search order is cached like any other import.
    pub fn import(&mut self, name: &str) -> Result<&ModuleEntry, DependencyError> {
        let loader = &self.loader;
        let search_order = &self.search_order;

        self.modules.get_or_load(name, || {
            loader
                .find(name, search_order.as_slice())
                .ok_or_else(|| DependencyError::ModuleNotFound {
                    name: name.to_string(),
                    searched: search_order.as_slice().to_vec(),
                })
        })
    }

    /// Temporarily force `label`'s directory to the front of the search order.
    ///
    /// The previous order is restored exactly when the guard drops, on every
    /// exit path including unwinding. Nested guards borrow their parent, so
    /// they are released in reverse acquisition order.
    pub fn prioritize(&mut self, label: &str) -> Result<PriorityGuard<'_>, DependencyError> {
        let dir = self
            .resolved
            .get(label)
            .map(Path::to_path_buf)
            .ok_or_else(|| DependencyError::UnknownDependency(label.to_string()))?;

        let saved = self.search_order.clone();
        self.search_order.prepend(dir);
        Ok(PriorityGuard::new(self, saved))
    }

    /// Run `f` with `label` prioritized.
    pub fn with_priority<T>(
        &mut self,
        label: &str,
        f: impl FnOnce(&mut Self) -> T,
    ) -> Result<T, DependencyError> {
        let mut guard = self.prioritize(label)?;
        Ok(f(&mut *guard))
    }

    pub(super) fn restore_search_order(&mut self, saved: ModuleSearchOrder) {
        self.search_order = saved;
    }
}

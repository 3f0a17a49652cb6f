//! Thread-safe registrar handle.
//!
//! The registrar itself assumes single-threaded use. Hosts that touch the
//! search order from several threads share it through this handle, which
//! turns every priority region into a critical section: the lock is held
//! from acquisition until the order has been restored.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::error::DependencyError;
use super::registrar::Registrar;
use super::search_order::ModuleSearchOrder;

#[derive(Debug, Clone)]
pub struct SharedRegistrar {
    inner: Arc<Mutex<Registrar>>,
}

impl SharedRegistrar {
    pub fn new(registrar: Registrar) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registrar)),
        }
    }

    /// Lock the registrar.
    ///
    /// A poisoned lock is recovered: priority guards restore the search
    /// order while unwinding, so the panicking holder left it consistent.
    pub fn lock(&self) -> MutexGuard<'_, Registrar> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with `label` prioritized, holding the lock throughout.
    pub fn with_priority<T>(
        &self,
        label: &str,
        f: impl FnOnce(&mut Registrar) -> T,
    ) -> Result<T, DependencyError> {
        self.lock().with_priority(label, f)
    }

    pub fn dependency_dir(&self, label: &str) -> Option<PathBuf> {
        self.lock().dependency_dir(label).map(PathBuf::from)
    }

    /// Copy of the current search order.
    pub fn search_order(&self) -> ModuleSearchOrder {
        self.lock().search_order().clone()
    }
}

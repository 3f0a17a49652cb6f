//! Scoped priority: one dependency forced to the front for a region.

use std::ops::{Deref, DerefMut};

use super::registrar::Registrar;
use super::search_order::ModuleSearchOrder;

/// Restores the saved search order when dropped.
///
/// Derefs to the [`Registrar`] so the guarded region imports through it.
/// Acquiring another guard from this one nests: the inner guard borrows the
/// outer one and must be dropped first.
#[derive(Debug)]
#[must_use = "the priority is dropped, and the order restored, immediately"]
pub struct PriorityGuard<'a> {
    registrar: &'a mut Registrar,
    saved: Option<ModuleSearchOrder>,
}

impl<'a> PriorityGuard<'a> {
    pub(super) fn new(registrar: &'a mut Registrar, saved: ModuleSearchOrder) -> Self {
        Self {
            registrar,
            saved: Some(saved),
        }
    }
}

impl Deref for PriorityGuard<'_> {
    type Target = Registrar;

    fn deref(&self) -> &Registrar {
        self.registrar
    }
}

impl DerefMut for PriorityGuard<'_> {
    fn deref_mut(&mut self) -> &mut Registrar {
        self.registrar
    }
}

impl Drop for PriorityGuard<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.registrar.restore_search_order(saved);
        }
    }
}

//! Process-wide module registry: modules cached under their names.
//!
//! An entry here makes a module importable by name regardless of the
//! current search order. Stubs stand in for heavy third-party modules that
//! dependency trees import but the host never exercises.

use std::collections::hash_map::{Entry, HashMap};
use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::Value;

/// A named placeholder module and the attributes it exposes.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleStub {
    pub name: String,
    pub attributes: BTreeMap<String, Value>,
}

impl ModuleStub {
    /// Stub exposing each of `attributes` as `null`.
    pub fn with_null_attributes(name: impl Into<String>, attributes: &[&str]) -> Self {
        Self {
            name: name.into(),
            attributes: attributes
                .iter()
                .map(|attr| ((*attr).to_string(), Value::Null))
                .collect(),
        }
    }
}

/// A cached module.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleEntry {
    /// Placeholder installed before any dependency was located.
    Stub { attributes: BTreeMap<String, Value> },
    /// Module found along the search order.
    Loaded { origin: PathBuf },
}

/// Name → cached module.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    entries: HashMap<String, ModuleEntry>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a stub under `name`, overwriting whatever was cached there.
    pub fn install_stub(&mut self, stub: ModuleStub) {
        self.entries.insert(
            stub.name,
            ModuleEntry::Stub {
                attributes: stub.attributes,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&ModuleEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached entry for `name`, or run `load` and cache its origin.
    pub(crate) fn get_or_load<E>(
        &mut self,
        name: &str,
        load: impl FnOnce() -> Result<PathBuf, E>,
    ) -> Result<&ModuleEntry, E> {
        match self.entries.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let origin = load()?;
                Ok(entry.insert(ModuleEntry::Loaded { origin }))
            }
        }
    }
}

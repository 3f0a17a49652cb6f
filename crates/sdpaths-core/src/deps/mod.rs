//! Dependency trees: location, search-order registration and scoped priority.
//!
//! # Architecture
//!
//! ```text
//! bootstrap (startup)
//!     │
//!     ├── locate_base_tree   - mandatory tree, fatal when missing
//!     ├── DependencyLocator  - optional trees, warns and skips
//!     └── Registrar          - owns the search order and module registry
//!             │
//!             ├── register          - append / front / cache-then-evict
//!             ├── PriorityGuard     - scoped front placement, restored on drop
//!             └── SharedRegistrar   - mutex-guarded handle for threaded hosts
//! ```

mod catalog;
mod error;
mod loader;
mod locator;
mod priority;
mod registrar;
mod registry;
mod resolved;
mod search_order;
mod shared;
mod spec;
mod startup;

pub use catalog::{
    BASE_TREE_LABEL, BASE_TREE_MARKER, BaseTreeSpec, default_base_tree, default_dependency_specs,
    default_stubs,
};
pub use error::DependencyError;
pub use loader::FsModuleLoader;
pub use locator::{DependencyLocator, locate_base_tree};
pub use priority::PriorityGuard;
pub use registrar::Registrar;
pub use registry::{ModuleEntry, ModuleRegistry, ModuleStub};
pub use resolved::ResolvedDependencies;
pub use search_order::ModuleSearchOrder;
pub use shared::SharedRegistrar;
pub use spec::{DependencyOptions, DependencySpec, LocatedDependency, Placement, ResolvedDependency};
pub use startup::{Startup, StartupConfig, bootstrap};

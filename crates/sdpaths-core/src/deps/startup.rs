//! Startup registration: anchors in, ready registrar out.
//!
//! Runs once, single-threaded, before the host imports anything from the
//! dependency trees:
//! 1. the script root goes to the front of the search order
//! 2. the base tree is located (fatal when missing)
//! 3. stubs are installed
//! 4. the dependency table is located and registered in table order

use std::path::{Path, PathBuf};

use tracing::info;

use super::catalog::{BaseTreeSpec, default_base_tree, default_dependency_specs, default_stubs};
use super::error::DependencyError;
use super::locator::{DependencyLocator, locate_base_tree};
use super::registrar::Registrar;
use super::registry::ModuleStub;
use super::search_order::ModuleSearchOrder;
use super::spec::DependencySpec;
use crate::paths::{PathAnchors, current_dir};
use crate::ports::{LogSink, ModuleLoader};

/// Everything startup registration needs.
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Root the dependency candidates are resolved against.
    pub script_path: PathBuf,
    /// Directory relative paths (such as the `.` base tree candidate) are
    /// resolved against.
    pub working_dir: PathBuf,
    /// The host's search order before registration.
    pub initial_search_order: ModuleSearchOrder,
    pub base_tree: BaseTreeSpec,
    pub stubs: Vec<ModuleStub>,
    /// Builds the dependency table from the located base tree.
    pub dependencies: fn(&Path) -> Vec<DependencySpec>,
}

impl StartupConfig {
    /// The host's built-in tables for the given anchors.
    pub fn for_anchors(anchors: &PathAnchors) -> Result<Self, DependencyError> {
        Ok(Self {
            script_path: anchors.script_path().to_path_buf(),
            working_dir: current_dir()?,
            initial_search_order: ModuleSearchOrder::new(),
            base_tree: default_base_tree(anchors.script_path()),
            stubs: default_stubs(),
            dependencies: default_dependency_specs,
        })
    }
}

/// Result of a successful startup.
#[derive(Debug)]
pub struct Startup {
    pub registrar: Registrar,
    /// Absolute location of the base tree.
    pub base_tree: PathBuf,
}

/// Run startup registration.
///
/// Missing optional trees are reported through `sink` and skipped. A missing
/// base tree or a failed one-shot import aborts startup.
pub fn bootstrap(
    config: StartupConfig,
    loader: impl ModuleLoader + 'static,
    sink: Option<&dyn LogSink>,
) -> Result<Startup, DependencyError> {
    let mut registrar = Registrar::new(config.initial_search_order, loader);
    registrar.prepend_dir(&config.script_path);

    let base_tree = locate_base_tree(&config.base_tree, &config.working_dir)?;
    info!(path = %base_tree.display(), "Located {}", config.base_tree.label);

    registrar.install_stubs(config.stubs);

    let specs = (config.dependencies)(&base_tree);
    let mut locator = DependencyLocator::new(&config.script_path)?.with_working_dir(&config.working_dir);
    if let Some(sink) = sink {
        locator = locator.with_sink(sink);
    }

    for located in locator.locate(&specs) {
        registrar.register(located)?;
    }

    Ok(Startup {
        registrar,
        base_tree,
    })
}

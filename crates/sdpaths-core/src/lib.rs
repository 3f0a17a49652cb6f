#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod deps;
pub mod options;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use deps::{
    DependencyError, DependencyLocator, DependencyOptions, DependencySpec, FsModuleLoader,
    LocatedDependency, ModuleEntry, ModuleSearchOrder, ModuleStub, PriorityGuard, Registrar,
    ResolvedDependency, SharedRegistrar, Startup, StartupConfig, bootstrap,
};
pub use options::{OptionInfo, Options, WORKSPACE_DIR_KEYS};
pub use paths::{
    AnchorOverrides, PathAnchors, PathError, PathNormalizer, ProvisionReport, RootSource,
    create_paths, provision,
};
pub use ports::{LogSink, ModuleLoader, NoopLogSink, TracingLogSink};

// Only referenced from generated mocks and unit tests
#[cfg(test)]
use mockall as _;

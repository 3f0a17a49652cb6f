//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces the core expects from its host. They contain
//! no implementation details beyond trivial no-op/forwarding adapters.

pub mod log_sink;
pub mod module_loader;

pub use log_sink::{LogSink, NoopLogSink, TracingLogSink};
pub use module_loader::ModuleLoader;

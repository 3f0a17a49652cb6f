//! Log sink port for host-visible diagnostics.
//!
//! The locator reports missing dependencies and the provisioner reports
//! directory creation through this port. A host without a sink passes
//! `None` and those messages are dropped.

/// Destination for startup and provisioning diagnostics.
///
/// # Implementations
///
/// - `TracingLogSink` - forwards to `tracing` (used by the CLI)
/// - `NoopLogSink` - discards everything
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    /// Low-importance progress message (e.g. a directory was created).
    fn debug(&self, message: &str);

    /// Degraded-capability notice (e.g. an optional dependency is missing).
    fn warning(&self, message: &str);

    /// A recovered failure (e.g. a directory could not be created).
    fn error(&self, message: &str);
}

/// Sink that forwards every message to `tracing` under the `sdpaths` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "sdpaths", "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "sdpaths", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "sdpaths", "{message}");
    }
}

/// A sink that discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    fn debug(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

//! Best-effort workspace directory provisioning.
//!
//! Provisioning is idempotent and additive: existing directories are left
//! alone, empty entries are skipped, and a directory that cannot be created
//! is reported and skipped without stopping the rest. Nothing is rolled back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::anchors::PathAnchors;
use super::error::PathError;
use super::normalize::PathNormalizer;
use crate::options::{Options, WORKSPACE_DIR_KEYS};
use crate::ports::LogSink;

/// What a provisioning pass did, entry by entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
    /// Empty or absent entries.
    pub skipped: usize,
    /// Directories that could not be created, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl ProvisionReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    fn merge(&mut self, other: Self) {
        self.created.extend(other.created);
        self.existing.extend(other.existing);
        self.skipped += other.skipped;
        self.failed.extend(other.failed);
    }
}

/// Create every listed directory that does not exist yet.
///
/// Never fails: creation errors go to `sink` at error severity and into the
/// report.
pub fn provision<I, P>(dirs: I, sink: Option<&dyn LogSink>) -> ProvisionReport
where
    I: IntoIterator<Item = Option<P>>,
    P: AsRef<Path>,
{
    let mut report = ProvisionReport::default();

    for dir in dirs {
        let Some(dir) = dir else {
            report.skipped += 1;
            continue;
        };
        let dir: &Path = dir.as_ref();
        if dir.as_os_str().is_empty() {
            report.skipped += 1;
            continue;
        }

        if dir.exists() {
            report.existing.push(dir.to_path_buf());
            continue;
        }

        match create_dir(dir) {
            Ok(()) => {
                debug!(path = %dir.display(), "Created directory");
                if let Some(sink) = sink {
                    sink.debug(&format!("Create path: {}", dir.display()));
                }
                report.created.push(dir.to_path_buf());
            }
            Err(e) => {
                if let Some(sink) = sink {
                    sink.error(&format!("Failed to create path: {} {e}", dir.display()));
                }
                report.failed.push((dir.to_path_buf(), e.to_string()));
            }
        }
    }

    report
}

/// `create_dir_all`, treating a concurrent creation as success.
fn create_dir(dir: &Path) -> io::Result<()> {
    match fs::create_dir_all(dir) {
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        other => other,
    }
}

/// Provision the anchor directories, then every workspace directory.
///
/// Keys are normalized one at a time, each after everything before it has
/// been created, since normalization checks what already exists. An option
/// without value or default fails the call before anything is created.
pub fn create_paths(
    anchors: &PathAnchors,
    options: &mut Options,
    sink: Option<&dyn LogSink>,
) -> Result<ProvisionReport, PathError> {
    let normalizer = PathNormalizer::for_anchors(anchors)?;
    create_paths_with(&normalizer, anchors, options, sink)
}

/// [`create_paths`] with an explicit normalizer.
pub fn create_paths_with(
    normalizer: &PathNormalizer,
    anchors: &PathAnchors,
    options: &mut Options,
    sink: Option<&dyn LogSink>,
) -> Result<ProvisionReport, PathError> {
    for key in WORKSPACE_DIR_KEYS {
        options.effective(key)?;
    }

    let mut report = provision(anchors.provisioned_dirs().map(Some), sink);
    for key in WORKSPACE_DIR_KEYS {
        let dir = normalizer.normalize(key, options)?;
        report.merge(provision([dir], sink));
    }
    Ok(report)
}

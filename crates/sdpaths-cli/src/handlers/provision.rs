//! Provision command handler.
//!
//! Creates missing anchor and workspace directories from an options file.

use std::fmt::Write as _;
use std::path::Path;

use sdpaths_core::{
    AnchorOverrides, Options, PathAnchors, ProvisionReport, TracingLogSink, create_paths,
};
use tracing::info;

use crate::error::CliError;

/// Execute the provision command.
///
/// With `write_back`, values the normalizer rewrote are saved to the same
/// options file. The file is left untouched when nothing changed.
///
/// Directories that could not be created are listed in the printed report
/// but do not fail the command.
pub fn execute(
    overrides: &AnchorOverrides<'_>,
    options_file: &Path,
    write_back: bool,
) -> Result<(), CliError> {
    let anchors = PathAnchors::resolve(overrides)?;
    let report = provision_from_file(&anchors, options_file, write_back)?;
    print!("{}", render(&report));
    Ok(())
}

/// Load options, provision, and optionally persist rewritten values.
pub fn provision_from_file(
    anchors: &PathAnchors,
    options_file: &Path,
    write_back: bool,
) -> Result<ProvisionReport, CliError> {
    let mut options = Options::load(options_file)?;
    let before = options.clone();

    let report = create_paths(anchors, &mut options, Some(&TracingLogSink))?;

    if write_back && options != before {
        options.save(options_file)?;
        info!(path = %options_file.display(), "Wrote back normalized options");
    }

    Ok(report)
}

/// Report as a short summary with the affected paths.
pub fn render(report: &ProvisionReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "created = {}", report.created.len());
    for dir in &report.created {
        let _ = writeln!(out, "  {}", dir.display());
    }
    let _ = writeln!(out, "existing = {}", report.existing.len());
    let _ = writeln!(out, "skipped = {}", report.skipped);
    let _ = writeln!(out, "failed = {}", report.failed.len());
    for (dir, reason) in &report.failed {
        let _ = writeln!(out, "  {}: {reason}", dir.display());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn render_summarizes_each_bucket() {
        let report = ProvisionReport {
            created: vec![PathBuf::from("/data/outputs/text")],
            existing: vec![PathBuf::from("/data")],
            skipped: 3,
            failed: vec![(PathBuf::from("/ro/styles"), "Permission denied".to_string())],
        };

        assert_eq!(
            render(&report),
            "created = 1\n  /data/outputs/text\nexisting = 1\nskipped = 3\nfailed = 1\n  /ro/styles: Permission denied\n"
        );
    }

    #[test]
    fn provisions_from_options_file_without_rewriting_absolute_roots() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("config.json");
        Options::with_workspace_defaults().save(&file).unwrap();
        let saved = std::fs::read_to_string(&file).unwrap();

        let anchors = PathAnchors::new(temp.path().join("app"), temp.path().join("data"));
        let report = provision_from_file(&anchors, &file, true).unwrap();

        assert!(report.is_clean());
        assert!(temp.path().join("data/outputs/text").is_dir());
        assert_eq!(std::fs::read_to_string(&file).unwrap(), saved);
    }

    #[test]
    fn uncreatable_directory_does_not_fail_the_command() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("config.json");
        Options::with_workspace_defaults().save(&file).unwrap();
        let data = temp.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        // A file where `outputs/` should be blocks every output directory.
        std::fs::write(data.join("outputs"), "").unwrap();

        let app = temp.path().join("app").to_string_lossy().into_owned();
        let data_dir = data.to_string_lossy().into_owned();
        let models = temp.path().join("models").to_string_lossy().into_owned();
        let overrides = AnchorOverrides {
            script_dir: Some(&app),
            data_dir: Some(&data_dir),
            models_dir: Some(&models),
        };

        execute(&overrides, &file, false).unwrap();

        assert!(temp.path().join("data/styles").is_dir());
    }

    #[test]
    fn unreadable_options_file_is_an_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let anchors = PathAnchors::new(temp.path().join("app"), temp.path().join("data"));

        let err = provision_from_file(&anchors, &temp.path().join("missing.json"), false).unwrap_err();

        assert_eq!(err.exit_code(), 74);
        assert!(!temp.path().join("data").exists());
    }
}

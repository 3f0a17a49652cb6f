//! Filesystem module loader.

use std::path::{Path, PathBuf};

use crate::ports::ModuleLoader;

/// Finds dotted module names as directories or source files.
///
/// `a.b` is provided by directory `D` when `D/a/b` is a directory or
/// `D/a/b.<ext>` is a file for one of the configured extensions.
#[derive(Debug, Clone)]
pub struct FsModuleLoader {
    extensions: Vec<String>,
}

impl Default for FsModuleLoader {
    fn default() -> Self {
        Self {
            extensions: vec!["py".to_string()],
        }
    }
}

impl FsModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognized source file extensions (without the dot).
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    fn find_in(&self, name: &str, dir: &Path) -> Option<PathBuf> {
        let relative: PathBuf = name.split('.').collect();
        let candidate = dir.join(&relative);

        if candidate.is_dir() {
            return Some(candidate);
        }

        self.extensions
            .iter()
            .map(|ext| candidate.with_extension(ext))
            .find(|file| file.is_file())
    }
}

impl ModuleLoader for FsModuleLoader {
    fn find(&self, name: &str, search_order: &[PathBuf]) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        search_order.iter().find_map(|dir| self.find_in(name, dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_package_directories_and_source_files() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("sgm/modules")).unwrap();
        fs::write(temp.path().join("inference_codeformer.py"), "").unwrap();

        let loader = FsModuleLoader::new();
        let order = vec![temp.path().to_path_buf()];

        assert_eq!(
            loader.find("sgm.modules", &order),
            Some(temp.path().join("sgm/modules"))
        );
        assert_eq!(
            loader.find("inference_codeformer", &order),
            Some(temp.path().join("inference_codeformer.py"))
        );
        assert_eq!(loader.find("taming", &order), None);
    }

    #[test]
    fn first_directory_in_order_wins() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::create_dir(first.path().join("scripts")).unwrap();
        fs::create_dir(second.path().join("scripts")).unwrap();

        let loader = FsModuleLoader::new();
        let order = vec![second.path().to_path_buf(), first.path().to_path_buf()];

        assert_eq!(
            loader.find("scripts", &order),
            Some(second.path().join("scripts"))
        );
    }

    #[test]
    fn custom_extensions_replace_default() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("plugin.lua"), "").unwrap();
        fs::write(temp.path().join("other.py"), "").unwrap();

        let loader = FsModuleLoader::new().with_extensions(["lua"]);
        let order = vec![temp.path().to_path_buf()];

        assert!(loader.find("plugin", &order).is_some());
        assert!(loader.find("other", &order).is_none());
    }
}

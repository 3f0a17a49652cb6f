//! Shared fixtures for sdpaths-core integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sdpaths_core::LogSink;
use tempfile::TempDir;

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warning,
    Error,
}

/// Sink that keeps every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.records.lock().unwrap().push((level, message.to_string()));
    }
}

impl LogSink for RecordingSink {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

/// A host checkout with its dependency trees under `app/repositories/`.
pub struct HostLayout {
    pub temp: TempDir,
}

/// Trees a layout can contain, by directory name under `repositories/`.
pub const ALL_TREES: [&str; 6] = [
    "stable-diffusion-stability-ai",
    "generative-models",
    "taming-transformers",
    "CodeFormer",
    "BLIP",
    "k-diffusion",
];

impl HostLayout {
    /// Layout containing only the listed trees.
    pub fn with_trees(trees: &[&str]) -> Self {
        let layout = Self {
            temp: tempfile::tempdir().unwrap(),
        };
        fs::create_dir_all(layout.app()).unwrap();

        for tree in trees {
            let root = layout.repo(tree);
            match *tree {
                "stable-diffusion-stability-ai" => {
                    touch(&root.join("ldm/models/diffusion/ddpm.py"));
                }
                "generative-models" => {
                    fs::create_dir_all(root.join("sgm")).unwrap();
                    touch(&root.join("scripts/__init__.py"));
                }
                "taming-transformers" => fs::create_dir_all(root.join("taming")).unwrap(),
                "CodeFormer" => touch(&root.join("inference_codeformer.py")),
                "BLIP" => touch(&root.join("models/blip.py")),
                "k-diffusion" => touch(&root.join("k_diffusion/sampling.py")),
                other => panic!("unknown tree {other}"),
            }
        }
        layout
    }

    pub fn full() -> Self {
        Self::with_trees(&ALL_TREES)
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn app(&self) -> PathBuf {
        self.temp.path().join("app")
    }

    pub fn repo(&self, tree: &str) -> PathBuf {
        self.app().join("repositories").join(tree)
    }
}

pub fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

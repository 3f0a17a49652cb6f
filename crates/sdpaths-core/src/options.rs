//! Workspace options: live values plus declared defaults.
//!
//! This is the slice of the host's configuration object the path
//! normalizer reads, and occasionally writes when a value has to be
//! rewritten relative to the application root.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths::PathError;

/// Option keys naming workspace directories, in provisioning order.
pub const WORKSPACE_DIR_KEYS: [&str; 15] = [
    "temp_dir",
    "hypernetwork_dir",
    "ckpt_dir",
    "vae_dir",
    "diffusers_dir",
    "embeddings_dir",
    "outdir_samples",
    "outdir_txt2img_samples",
    "outdir_img2img_samples",
    "outdir_extras_samples",
    "outdir_grids",
    "outdir_txt2img_grids",
    "outdir_img2img_grids",
    "outdir_save",
    "styles_dir",
];

/// Declared metadata of one option.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OptionInfo {
    /// Value used when the live value is absent or empty.
    pub default: String,
}

/// Live option values and their declared defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Current values, keyed by option name.
    pub data: BTreeMap<String, String>,
    /// Declared defaults, keyed by option name.
    pub data_labels: BTreeMap<String, OptionInfo>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options declaring the host's default for every workspace directory.
    pub fn with_workspace_defaults() -> Self {
        let defaults = [
            ("temp_dir", ""),
            ("hypernetwork_dir", "models/hypernetworks"),
            ("ckpt_dir", "models/Stable-diffusion"),
            ("vae_dir", "models/VAE"),
            ("diffusers_dir", "models/Diffusers"),
            ("embeddings_dir", "models/embeddings"),
            ("outdir_samples", ""),
            ("outdir_txt2img_samples", "outputs/text"),
            ("outdir_img2img_samples", "outputs/image"),
            ("outdir_extras_samples", "outputs/extras"),
            ("outdir_grids", ""),
            ("outdir_txt2img_grids", "outputs/grids"),
            ("outdir_img2img_grids", "outputs/grids"),
            ("outdir_save", "outputs/save"),
            ("styles_dir", "styles"),
        ];

        defaults
            .into_iter()
            .fold(Self::new(), |options, (key, default)| {
                options.with_default(key, default)
            })
    }

    /// Declare the default of `key`.
    #[must_use]
    pub fn with_default(mut self, key: impl Into<String>, default: impl Into<String>) -> Self {
        self.data_labels.insert(
            key.into(),
            OptionInfo {
                default: default.into(),
            },
        );
        self
    }

    /// Set the live value of `key`.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// The live value of `key`, if any.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// The live value when non-empty, else the declared default.
    pub fn effective(&self, key: &str) -> Result<&str, PathError> {
        match self.value(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => self
                .data_labels
                .get(key)
                .map(|info| info.default.as_str())
                .ok_or_else(|| PathError::UnknownOption(key.to_string())),
        }
    }

    /// Read options from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PathError> {
        let raw = fs::read_to_string(path).map_err(|e| PathError::OptionsFileError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| PathError::OptionsFileError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write options to a JSON file, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<(), PathError> {
        let mut content =
            serde_json::to_string_pretty(self).map_err(|e| PathError::OptionsFileError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        content.push('\n');

        fs::write(path, content).map_err(|e| PathError::OptionsFileError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

//! Path anchors: the immutable base paths everything else is resolved from.
//!
//! Anchors are fixed once, before any dependency is located or any
//! workspace directory is provisioned. [`PathAnchors`] is also the "golden
//! truth" diagnostic view exposed by `sdpaths paths`.

use std::fmt;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{
    RootSource, resolve_data_root, resolve_models_override, resolve_script_root,
};

/// File name of the default inference config under `configs/`.
pub const DEFAULT_CONFIG_FILE: &str = "v1-inference.yaml";

/// File name of the default checkpoint under the script root.
pub const DEFAULT_MODEL_FILE: &str = "model.ckpt";

/// Explicit overrides for anchor resolution (e.g. CLI flags).
///
/// Each `None` falls back to the matching `SDPATHS_*` variable, then to the
/// platform default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorOverrides<'a> {
    pub script_dir: Option<&'a str>,
    pub data_dir: Option<&'a str>,
    pub models_dir: Option<&'a str>,
}

/// All anchor paths captured in a single immutable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAnchors {
    script_path: PathBuf,
    data_path: PathBuf,
    models_path: PathBuf,
    sd_configs_path: PathBuf,
    sd_default_config: PathBuf,
    sd_model_file: PathBuf,
    default_sd_model_file: PathBuf,
    extensions_dir: PathBuf,
    extensions_builtin_dir: PathBuf,
    script_source: RootSource,
    data_source: RootSource,
}

impl PathAnchors {
    /// Build anchors from a script root and a data root, deriving the rest.
    pub fn new(script_path: impl Into<PathBuf>, data_path: impl Into<PathBuf>) -> Self {
        Self::with_sources(
            script_path.into(),
            RootSource::Explicit,
            data_path.into(),
            RootSource::Explicit,
        )
    }

    fn with_sources(
        script_path: PathBuf,
        script_source: RootSource,
        data_path: PathBuf,
        data_source: RootSource,
    ) -> Self {
        let sd_configs_path = script_path.join("configs");
        let sd_model_file = script_path.join(DEFAULT_MODEL_FILE);

        Self {
            models_path: data_path.join("models"),
            sd_default_config: sd_configs_path.join(DEFAULT_CONFIG_FILE),
            default_sd_model_file: sd_model_file.clone(),
            extensions_dir: data_path.join("extensions"),
            extensions_builtin_dir: script_path.join("extensions-builtin"),
            sd_configs_path,
            sd_model_file,
            script_path,
            data_path,
            script_source,
            data_source,
        }
    }

    /// Replace the models directory.
    #[must_use]
    pub fn with_models_dir(mut self, models_path: impl Into<PathBuf>) -> Self {
        self.models_path = models_path.into();
        self
    }

    /// Resolve anchors using the current environment only.
    pub fn from_env() -> Result<Self, PathError> {
        Self::resolve(&AnchorOverrides::default())
    }

    /// Resolve anchors with explicit overrides taking precedence over the
    /// environment.
    pub fn resolve(overrides: &AnchorOverrides<'_>) -> Result<Self, PathError> {
        let script = resolve_script_root(overrides.script_dir)?;
        let data = resolve_data_root(overrides.data_dir, &script.path)?;
        let models = resolve_models_override(overrides.models_dir)?;

        let anchors = Self::with_sources(script.path, script.source, data.path, data.source);
        Ok(match models {
            Some(models) => anchors.with_models_dir(models.path),
            None => anchors,
        })
    }

    /// Application root; dependency candidates are relative to it.
    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Base data directory for user-owned state.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn models_path(&self) -> &Path {
        &self.models_path
    }

    pub fn sd_configs_path(&self) -> &Path {
        &self.sd_configs_path
    }

    pub fn sd_default_config(&self) -> &Path {
        &self.sd_default_config
    }

    pub fn sd_model_file(&self) -> &Path {
        &self.sd_model_file
    }

    pub fn default_sd_model_file(&self) -> &Path {
        &self.default_sd_model_file
    }

    pub fn extensions_dir(&self) -> &Path {
        &self.extensions_dir
    }

    pub fn extensions_builtin_dir(&self) -> &Path {
        &self.extensions_builtin_dir
    }

    /// How the script root was determined.
    pub const fn script_source(&self) -> RootSource {
        self.script_source
    }

    /// How the data root was determined.
    pub const fn data_source(&self) -> RootSource {
        self.data_source
    }

    /// Anchor directories the provisioner creates, in creation order.
    pub fn provisioned_dirs(&self) -> [&Path; 6] {
        [
            &self.data_path,
            &self.script_path,
            &self.models_path,
            &self.sd_configs_path,
            &self.extensions_dir,
            &self.extensions_builtin_dir,
        ]
    }
}

impl fmt::Display for PathAnchors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "script_path = {}", self.script_path.display())?;
        writeln!(f, "script_source = {:?}", self.script_source)?;
        writeln!(f, "data_path = {}", self.data_path.display())?;
        writeln!(f, "data_source = {:?}", self.data_source)?;
        writeln!(f, "models_path = {}", self.models_path.display())?;
        writeln!(f, "sd_configs_path = {}", self.sd_configs_path.display())?;
        writeln!(f, "sd_default_config = {}", self.sd_default_config.display())?;
        writeln!(f, "sd_model_file = {}", self.sd_model_file.display())?;
        writeln!(
            f,
            "default_sd_model_file = {}",
            self.default_sd_model_file.display()
        )?;
        writeln!(f, "extensions_dir = {}", self.extensions_dir.display())?;
        write!(
            f,
            "extensions_builtin_dir = {}",
            self.extensions_builtin_dir.display()
        )
    }
}

//! The host's fixed dependency table.
//!
//! These are the source trees the host expects next to its base tree, plus
//! the stand-ins installed for modules those trees import but never use.

use std::path::{Path, PathBuf};

use super::registry::ModuleStub;
use super::spec::{DependencyOptions, DependencySpec};

/// Label of the foundational source tree.
pub const BASE_TREE_LABEL: &str = "Stable Diffusion";

/// Marker proving a directory holds the base tree.
pub const BASE_TREE_MARKER: &str = "ldm/models/diffusion/ddpm.py";

/// Where to look for the mandatory base tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTreeSpec {
    pub label: String,
    /// Tried in order; the first containing `marker` wins.
    pub candidates: Vec<PathBuf>,
    pub marker: PathBuf,
}

/// Candidate locations of the base tree for a given script root.
pub fn default_base_tree(script_path: &Path) -> BaseTreeSpec {
    let mut candidates = vec![
        script_path.join("repositories/stable-diffusion-stability-ai"),
        PathBuf::from("."),
    ];
    if let Some(parent) = script_path.parent() {
        candidates.push(parent.to_path_buf());
    }

    BaseTreeSpec {
        label: BASE_TREE_LABEL.to_string(),
        candidates,
        marker: PathBuf::from(BASE_TREE_MARKER),
    }
}

/// Dependency trees laid out next to the base tree, in registration order.
pub fn default_dependency_specs(sd_path: &Path) -> Vec<DependencySpec> {
    vec![
        DependencySpec::new(sd_path, "ldm", BASE_TREE_LABEL),
        DependencySpec::new(
            sd_path.join("../generative-models"),
            "sgm",
            "Stable Diffusion XL",
        )
        .with_options(DependencyOptions::SGM),
        DependencySpec::new(
            sd_path.join("../taming-transformers"),
            "taming",
            "Taming Transformers",
        ),
        DependencySpec::new(
            sd_path.join("../CodeFormer"),
            "inference_codeformer.py",
            "CodeFormer",
        ),
        DependencySpec::new(sd_path.join("../BLIP"), "models/blip.py", "BLIP"),
        DependencySpec::new(
            sd_path.join("../k-diffusion"),
            "k_diffusion/sampling.py",
            "k_diffusion",
        )
        .with_options(DependencyOptions::AT_START),
    ]
}

/// Stand-ins the XL tree imports at load time but the host never calls.
pub fn default_stubs() -> Vec<ModuleStub> {
    vec![
        ModuleStub::with_null_attributes("taming.modules.losses.lpips", &["LPIPS"]),
        ModuleStub::with_null_attributes("sgm.data", &["StableDataModuleFromConfig"]),
    ]
}

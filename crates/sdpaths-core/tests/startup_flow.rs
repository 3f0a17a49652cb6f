//! End-to-end startup registration against on-disk layouts.

mod common;

use std::path::{Path, PathBuf};

use common::{HostLayout, Level, RecordingSink};
use sdpaths_core::deps::BASE_TREE_LABEL;
use sdpaths_core::{
    DependencyError, FsModuleLoader, ModuleEntry, ModuleSearchOrder, PathAnchors, Startup,
    StartupConfig, bootstrap,
};

fn config_for(layout: &HostLayout) -> StartupConfig {
    let anchors = PathAnchors::new(layout.app(), layout.app());
    let mut config = StartupConfig::for_anchors(&anchors).unwrap();
    // Keep the "." candidate inside the fixture.
    config.working_dir = layout.root().to_path_buf();
    config
}

fn start(layout: &HostLayout, sink: &RecordingSink) -> Result<Startup, DependencyError> {
    bootstrap(config_for(layout), FsModuleLoader::new(), Some(sink))
}

#[test]
fn full_layout_registers_every_tree_in_policy_order() {
    let layout = HostLayout::full();
    let sink = RecordingSink::default();

    let startup = start(&layout, &sink).expect("startup");
    let registrar = &startup.registrar;

    assert_eq!(startup.base_tree, layout.repo("stable-diffusion-stability-ai"));
    let order: Vec<&Path> = registrar.search_order().iter().collect();
    assert_eq!(
        order,
        [
            layout.repo("k-diffusion").as_path(),
            layout.app().as_path(),
            layout.repo("stable-diffusion-stability-ai").as_path(),
            layout.repo("taming-transformers").as_path(),
            layout.repo("CodeFormer").as_path(),
            layout.repo("BLIP").as_path(),
        ]
    );

    let labels: Vec<&str> = registrar.resolved().iter().map(|(label, _)| label).collect();
    assert_eq!(
        labels,
        [
            BASE_TREE_LABEL,
            "Stable Diffusion XL",
            "Taming Transformers",
            "CodeFormer",
            "BLIP",
            "k_diffusion",
        ]
    );
    assert!(sink.messages(Level::Warning).is_empty());
}

#[test]
fn xl_tree_is_importable_but_never_searchable() {
    let layout = HostLayout::full();
    let sink = RecordingSink::default();
    let mut registrar = start(&layout, &sink).unwrap().registrar;

    let xl = layout.repo("generative-models");
    assert!(!registrar.search_order().contains(&xl));
    assert_eq!(registrar.dependency_dir("Stable Diffusion XL"), Some(xl.as_path()));

    assert_eq!(
        registrar.import("sgm").unwrap(),
        &ModuleEntry::Loaded {
            origin: xl.join("sgm")
        }
    );
    assert!(matches!(
        registrar.import("scripts"),
        Err(DependencyError::ModuleNotFound { .. })
    ));
}

#[test]
fn stubs_are_in_place_after_startup() {
    let layout = HostLayout::full();
    let sink = RecordingSink::default();
    let registrar = start(&layout, &sink).unwrap().registrar;

    for name in ["taming.modules.losses.lpips", "sgm.data"] {
        assert!(
            matches!(registrar.modules().get(name), Some(ModuleEntry::Stub { .. })),
            "{name} should be stubbed"
        );
    }
}

#[test]
fn missing_optional_trees_warn_once_each_and_are_skipped() {
    let layout = HostLayout::with_trees(&[
        "stable-diffusion-stability-ai",
        "generative-models",
        "taming-transformers",
        "k-diffusion",
    ]);
    let sink = RecordingSink::default();

    let mut registrar = start(&layout, &sink).unwrap().registrar;

    let warnings = sink.messages(Level::Warning);
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].starts_with("CodeFormer not found at path"));
    assert!(warnings[1].starts_with("BLIP not found at path"));

    assert!(!registrar.resolved().contains("BLIP"));
    assert!(matches!(
        registrar.prioritize("BLIP"),
        Err(DependencyError::UnknownDependency(_))
    ));
}

#[test]
fn missing_base_tree_is_fatal_and_lists_candidates() {
    let layout = HostLayout::with_trees(&["BLIP"]);
    let sink = RecordingSink::default();

    let err = start(&layout, &sink).unwrap_err();

    let DependencyError::BaseTreeNotFound { candidates, .. } = &err else {
        panic!("expected BaseTreeNotFound, got {err:?}");
    };
    assert_eq!(candidates.len(), 3);
    let message = err.to_string();
    assert!(message.contains("stable-diffusion-stability-ai"));
    assert!(sink.messages(Level::Warning).is_empty());
}

#[test]
fn xl_tree_without_importable_package_aborts_startup() {
    let layout = HostLayout::with_trees(&["stable-diffusion-stability-ai"]);
    // Marker exists, but as a plain file the loader cannot import.
    common::touch(&layout.repo("generative-models").join("sgm"));
    let sink = RecordingSink::default();

    let err = start(&layout, &sink).unwrap_err();
    assert!(matches!(err, DependencyError::ModuleNotFound { ref name, .. } if name == "sgm"));
}

#[test]
fn host_search_order_is_kept_behind_script_root() {
    let layout = HostLayout::with_trees(&["stable-diffusion-stability-ai"]);
    let sink = RecordingSink::default();
    let mut config = config_for(&layout);
    config.initial_search_order = ["/usr/lib/host"].into_iter().collect::<ModuleSearchOrder>();

    let registrar = bootstrap(config, FsModuleLoader::new(), Some(&sink))
        .unwrap()
        .registrar;

    let order: Vec<PathBuf> = registrar.search_order().iter().map(Path::to_path_buf).collect();
    assert_eq!(
        order,
        vec![
            layout.app(),
            PathBuf::from("/usr/lib/host"),
            layout.repo("stable-diffusion-stability-ai"),
        ]
    );
}

#[test]
fn priority_region_imports_through_prioritized_tree_and_restores() {
    let layout = HostLayout::full();
    // A host module shadowing BLIP's `models` package.
    common::touch(&layout.app().join("models/blip.py"));
    let sink = RecordingSink::default();
    let mut registrar = start(&layout, &sink).unwrap().registrar;
    let before = registrar.search_order().clone();

    let origin = registrar
        .with_priority("BLIP", |r| match r.import("models.blip") {
            Ok(ModuleEntry::Loaded { origin }) => origin.clone(),
            other => panic!("unexpected import result {other:?}"),
        })
        .unwrap();

    assert_eq!(origin, layout.repo("BLIP").join("models/blip.py"));
    assert_eq!(registrar.search_order(), &before);
}

// README rendering shared by the crate build scripts.
// Pull in with: include!("../build_common.rs");
//
// The including build.rs must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Link rewrites so README links resolve as rustdoc module links.
const RUSTDOC_LINK_REWRITES: [(&str, &str); 2] = [
    // `src/paths/mod.rs` -> `paths/mod`
    ("](src/", "]("),
    (".rs)", ")"),
];

/// Render `<crate_dir>/README.md` into `$OUT_DIR/README_GENERATED.md`.
///
/// Links back to the workspace README become links to the repository URL
/// from the workspace manifest, when it has one. A crate without a README
/// gets an empty file so its `include_str!` still resolves.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");

    let Ok(readme) = fs::read_to_string(Path::new(crate_dir).join("README.md")) else {
        fs::write(dest_path, "").unwrap();
        return;
    };

    let mut rendered = RUSTDOC_LINK_REWRITES
        .iter()
        .fold(readme, |text, (from, to)| text.replace(from, to));

    if let Some(url) = workspace_repository(crate_dir) {
        rendered = rendered.replace("](../../README.md", &format!("]({url}"));
    }

    fs::write(dest_path, rendered).unwrap();
}

/// `repository` from the `[workspace.package]` table of the workspace root
/// two levels above `crate_dir`.
fn workspace_repository(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir).parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;

    let mut in_package_table = false;
    for line in content.lines().map(str::trim) {
        if line.starts_with('[') {
            in_package_table = line == "[workspace.package]";
            continue;
        }
        if !in_package_table {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.trim() == "repository" {
            // Quoted string value only; anything else is ignored.
            let value = value.trim();
            return value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .map(str::to_string);
        }
    }
    None
}

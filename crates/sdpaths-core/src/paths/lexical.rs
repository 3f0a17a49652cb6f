//! Lexical path arithmetic.
//!
//! None of these helpers touch the filesystem: `..` is collapsed textually
//! and symlinks are never followed, so results are stable whether or not the
//! paths exist yet.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` segments, duplicate separators and trailing slashes.
///
/// A `..` directly under the root stays at the root. Leading `..` segments of
/// a relative path are kept. An empty result becomes `.`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    // Number of normal segments currently in `out` that a `..` may remove.
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => {
                out.push(part);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Make `path` absolute against `cwd` and normalize it lexically.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&cwd.join(path))
    }
}

/// Express `path` relative to `base`, after absolutizing both against `cwd`.
///
/// Returns `None` when the two paths live under different roots (e.g.
/// different drive prefixes on Windows). Identical paths yield `.`.
pub fn relative_to(path: &Path, base: &Path, cwd: &Path) -> Option<PathBuf> {
    let path = absolutize(path, cwd);
    let base = absolutize(base, cwd);

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    if root_of(&path_parts) != root_of(&base_parts) {
        return None;
    }

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}

fn root_of<'a>(parts: &[Component<'a>]) -> Vec<Component<'a>> {
    parts
        .iter()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .copied()
        .collect()
}

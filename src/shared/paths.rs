//! Path normalization helpers
//!
//! Ignore rules and header comments always work on forward-slash relative
//! paths, whatever the host separator is.

use std::borrow::Cow;
use std::path::{Component, Path};

/// Replace the host separator with `/`
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    if std::path::MAIN_SEPARATOR != '/' && path.contains(std::path::MAIN_SEPARATOR) {
        Cow::Owned(path.replace(std::path::MAIN_SEPARATOR, "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Path of `path` relative to `root`, joined with `/`
///
/// Returns `None` when `path` does not live under `root`.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<Cow<'_, str>> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect();

    Some(segments.join("/"))
}

/// Lowercased extension with its leading dot, e.g. `.rs`
pub fn extension_key(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

//! Path resolution utilities.
//!
//! This module handles conversions between:
//! - Config-relative paths (source, output) and real filesystem paths
//! - Source file paths and the output page path
//! - The cover image reference and the file it points at

use std::path::{Path, PathBuf};

/// Derive the output page path from the source path.
///
/// The extension is replaced with `html`; a source without an extension
/// gets `.html` appended.
///
/// # Examples
/// ```ignore
/// output_path_for("res/tvende_ravne.txt") => "res/tvende_ravne.html"
/// output_path_for("res/poem") => "res/poem.html"
/// ```
pub fn output_path_for(source_path: &Path) -> PathBuf {
    source_path.with_extension("html")
}

/// Resolve a config-relative path against a base path.
pub fn resolve_path(base_path: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Locate the file a cover reference points at, as a browser opening the
/// output page would.
///
/// Returns `None` for URLs, which are not checked.
pub fn cover_asset_path(cover: &str, output_path: &Path) -> Option<PathBuf> {
    if cover.contains("://") || cover.starts_with("data:") {
        return None;
    }

    let output_dir = output_path.parent().unwrap_or_else(|| Path::new(""));
    Some(resolve_path(output_dir, Path::new(cover)))
}

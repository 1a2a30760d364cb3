//! IconSource entity - a vector image found by directory enumeration

use std::path::{Path, PathBuf};

/// A vector source image and the logical icon name derived from its file name.
///
/// Created once per enumeration and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IconSource {
    base_name: String,
    path: PathBuf,
}

impl IconSource {
    /// Build a source from a file path.
    ///
    /// Returns `None` when no usable base name remains (e.g. `.svg`).
    pub fn from_path(path: impl Into<PathBuf>, strip_suffix: Option<&str>) -> Option<Self> {
        let path = path.into();
        let file_name = path.file_name()?.to_str()?;
        let base_name = derive_base_name(file_name, strip_suffix);
        if base_name.is_empty() {
            return None;
        }
        Some(Self { base_name, path })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Derive the logical icon name from a source file name.
///
/// Without a `strip_suffix` the name is cut at its first `.`, so `logo.svg`
/// and `logo.v2.svg` both become `logo`.
///
/// With a `strip_suffix`, everything from the first `<suffix>.` on is dropped
/// (`ic.dark_24px.svg` → `ic.dark`). Names that don't carry the marker lose
/// only their extension (`app.v2.svg` → `app.v2`).
pub fn derive_base_name(file_name: &str, strip_suffix: Option<&str>) -> String {
    match strip_suffix {
        Some(marker) if !marker.is_empty() => {
            let pattern = format!("{marker}.");
            match file_name.find(&pattern) {
                Some(idx) => file_name[..idx].to_string(),
                None => file_name
                    .rsplit_once('.')
                    .map_or(file_name, |(stem, _)| stem)
                    .to_string(),
            }
        }
        _ => file_name.split('.').next().unwrap_or(file_name).to_string(),
    }
}

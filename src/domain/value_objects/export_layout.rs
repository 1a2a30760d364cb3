//! ExportLayout value object - naming convention for raster outputs

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Extension of every generated artifact
pub const RASTER_EXTENSION: &str = "png";

/// How a render task maps to a path beneath the profile's output directory.
///
/// Paths are a pure function of their inputs: no timestamps, no counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportLayout {
    /// `<out>/<bucket>/<base><suffix>.png` (Android drawables, app resources)
    DensitySuffixed,
    /// `<out>/<base><suffix>.png` (desktop icons)
    Flat,
    /// `<out>/<base>/Icon<size><suffix>.png` (iOS icon sets)
    PerIcon,
}

impl ExportLayout {
    /// Directory that must exist before any artifact of `bucket` is written.
    pub fn bucket_dir(&self, output_dir: &Path, bucket: &str) -> PathBuf {
        match self {
            ExportLayout::DensitySuffixed => output_dir.join(bucket),
            ExportLayout::Flat | ExportLayout::PerIcon => output_dir.to_path_buf(),
        }
    }

    /// Compute the artifact path for one (bucket, base name, size, suffix) combination.
    pub fn artifact_path(
        &self,
        output_dir: &Path,
        bucket: &str,
        base_name: &str,
        size: u32,
        suffix: &str,
    ) -> PathBuf {
        match self {
            ExportLayout::DensitySuffixed => output_dir
                .join(bucket)
                .join(format!("{base_name}{suffix}.{RASTER_EXTENSION}")),
            ExportLayout::Flat => {
                output_dir.join(format!("{base_name}{suffix}.{RASTER_EXTENSION}"))
            }
            ExportLayout::PerIcon => output_dir
                .join(base_name)
                .join(format!("Icon{size}{suffix}.{RASTER_EXTENSION}")),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportLayout::DensitySuffixed => "density-suffixed",
            ExportLayout::Flat => "flat",
            ExportLayout::PerIcon => "per-icon",
        }
    }
}

impl std::fmt::Display for ExportLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

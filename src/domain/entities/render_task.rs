//! RenderTask entity - one (source, bucket, size, suffix) combination
//!
//! A task fully determines one output artifact. Tasks carry no identity
//! beyond the current run and are recomputed on every invocation.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExportLayout;

use super::icon_source::IconSource;

/// A single raster to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTask {
    source: IconSource,
    bucket: String,
    size: u32,
    suffix: String,
    destination: PathBuf,
}

impl RenderTask {
    /// Create a task, computing its destination from the layout.
    pub fn new(
        source: IconSource,
        bucket: impl Into<String>,
        size: u32,
        suffix: impl Into<String>,
        layout: ExportLayout,
        output_dir: &Path,
    ) -> Self {
        let bucket = bucket.into();
        let suffix = suffix.into();
        let destination =
            layout.artifact_path(output_dir, &bucket, source.base_name(), size, &suffix);
        Self {
            source,
            bucket,
            size,
            suffix,
            destination,
        }
    }

    pub fn source(&self) -> &IconSource {
        &self.source
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Square edge length in pixels; width and height are both this value
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

//! Rasterizer port
//!
//! The one capability the icon exporter needs from the outside world:
//! turn a vector file into a square raster of a given size.

use std::path::{Path, PathBuf};

pub trait Rasterizer {
    /// Short tool name for messages
    fn name(&self) -> &str;

    /// Render `source` to `output` at exactly `width`×`height` pixels.
    fn render(&self, source: &Path, output: &Path, width: u32, height: u32)
        -> Result<(), RenderError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("failed to launch '{tool}': {message}")]
    Launch { tool: String, message: String },

    #[error("'{tool}' exited with {status}")]
    ExitStatus { tool: String, status: String },

    #[error("'{tool}' reported success but wrote nothing to {output}")]
    MissingOutput { tool: String, output: PathBuf },
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(
        &self,
        source: &Path,
        output: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        (**self).render(source, output, width, height)
    }
}

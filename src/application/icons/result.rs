//! Icon export result types

use std::path::PathBuf;

/// An artifact the rasterizer could not produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRender {
    pub path: PathBuf,
    pub error: String,
}

/// Result of an icon export run
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    /// Profile that was exported
    pub profile: String,
    /// Artifacts rendered (or that would be rendered in a dry run)
    pub written: Vec<PathBuf>,
    /// Artifacts that already existed
    pub skipped: Vec<PathBuf>,
    /// Artifacts that failed
    pub failed: Vec<FailedRender>,
    /// Directories created (or that would be created in a dry run)
    pub created_dirs: Vec<PathBuf>,
    /// Source directory that was missing or unreadable; set when the run stopped early
    pub missing_input: Option<PathBuf>,
    pub dry_run: bool,
}

impl ExportReport {
    pub fn new(profile: impl Into<String>, dry_run: bool) -> Self {
        Self {
            profile: profile.into(),
            dry_run,
            ..Self::default()
        }
    }

    pub fn add_failed(&mut self, path: PathBuf, error: impl Into<String>) {
        self.failed.push(FailedRender {
            path,
            error: error.into(),
        });
    }

    /// True when nothing failed and the inputs were usable
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.missing_input.is_none()
    }
}

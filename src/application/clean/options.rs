//! Clean options

use std::path::PathBuf;

/// Default directory recreated by `--reset-build`
pub const DEFAULT_RESET_DIR: &str = "Build";

/// Options for the clean command
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Directory whose contents are removed
    pub root: PathBuf,
    /// Directory removed and recreated empty after the clean
    pub reset_dir: Option<PathBuf>,
    /// Whether this is a dry run (no actual deletion)
    pub dry_run: bool,
}

impl CleanOptions {
    /// Create new clean options for a root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the directory to reset
    pub fn with_reset_dir(mut self, reset_dir: Option<PathBuf>) -> Self {
        self.reset_dir = reset_dir;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

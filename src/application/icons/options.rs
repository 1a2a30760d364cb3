//! Icon export options

use std::path::PathBuf;

/// Options for one icon export run
#[derive(Debug, Clone, Default)]
pub struct IconExportOptions {
    /// Directory the profile's relative paths resolve against (empty = current directory)
    pub root: PathBuf,
    /// Plan and report without rendering or creating directories
    pub dry_run: bool,
}

impl IconExportOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

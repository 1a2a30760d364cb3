//! Clean result types

use std::path::PathBuf;

/// Why a clean never started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanAbort {
    /// Root directory does not exist
    MissingRoot(PathBuf),
    /// Root is the filesystem root
    FilesystemRoot(PathBuf),
}

impl std::fmt::Display for CleanAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanAbort::MissingRoot(path) => write!(f, "no such directory, {}", path.display()),
            CleanAbort::FilesystemRoot(path) => {
                write!(f, "refusing to clean filesystem root {}", path.display())
            }
        }
    }
}

/// An entry that could not be removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Path to the entry
    pub path: PathBuf,
    /// Error reported by the filesystem
    pub reason: String,
}

impl SkippedEntry {
    pub fn new(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            reason: reason.into(),
        }
    }
}

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    /// Entries that were deleted (or would be deleted in dry run)
    pub deleted: Vec<PathBuf>,
    /// Entries that could not be deleted
    pub skipped: Vec<SkippedEntry>,
    /// Reset directory, if it was recreated
    pub reset: Option<PathBuf>,
    /// Set when the run returned before touching anything
    pub aborted: Option<CleanAbort>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl CleanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a deleted entry
    pub fn add_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    /// Add a skipped entry
    pub fn add_skipped(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.skipped.push(SkippedEntry::new(path, reason));
    }

    /// Check if operation was successful
    pub fn is_success(&self) -> bool {
        self.skipped.is_empty() && self.aborted.is_none()
    }
}

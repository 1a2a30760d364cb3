//! Git update result types

use std::path::PathBuf;

/// A git command that did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitFailure {
    /// Directory the command ran in
    pub dir: PathBuf,
    /// Arguments passed to git, space separated
    pub command: String,
    /// What went wrong
    pub error: String,
}

/// Result of a git update run
#[derive(Debug, Clone, Default)]
pub struct GitUpdateReport {
    /// Submodules that were visited
    pub updated: Vec<PathBuf>,
    /// Submodule paths whose directory does not exist
    pub unreachable: Vec<PathBuf>,
    /// Failed git commands
    pub failures: Vec<GitFailure>,
    /// `.gitmodules` was absent
    pub missing_gitmodules: bool,
    /// `.gitmodules` exists but could not be read
    pub unreadable_gitmodules: Option<String>,
}

impl GitUpdateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_failure(&mut self, dir: PathBuf, command: String, error: String) {
        self.failures.push(GitFailure {
            dir,
            command,
            error,
        });
    }

    /// Check if every git command succeeded and every submodule was reachable
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
            && self.unreachable.is_empty()
            && self.unreadable_gitmodules.is_none()
    }
}

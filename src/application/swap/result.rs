//! Swap result types

use std::path::PathBuf;

/// Why a swap stopped before walking the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapAbort {
    /// Input file does not exist
    MissingInput(PathBuf),
    /// Root directory does not exist
    MissingRoot(PathBuf),
    /// Input file is empty
    EmptyInput(PathBuf),
    /// Input file could not be read
    UnreadableInput { path: PathBuf, error: String },
}

impl std::fmt::Display for SwapAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapAbort::MissingInput(path) => write!(f, "no such file, {}", path.display()),
            SwapAbort::MissingRoot(path) => write!(f, "no such directory, {}", path.display()),
            SwapAbort::EmptyInput(path) => {
                write!(f, "{} has no usable content to swap", path.display())
            }
            SwapAbort::UnreadableInput { path, error } => {
                write!(f, "cannot read {}: {}", path.display(), error)
            }
        }
    }
}

/// Result of a swap operation
#[derive(Debug, Clone, Default)]
pub struct SwapReport {
    /// Files whose content was replaced
    pub swapped: Vec<PathBuf>,
    /// Matching files that already held the input's content
    pub unchanged: Vec<PathBuf>,
    /// Matching files that could not be rewritten
    pub errors: Vec<String>,
    /// Set when the run stopped before walking the tree
    pub aborted: Option<SwapAbort>,
}

impl SwapReport {
    /// Number of files whose name matched the input
    pub fn matched_count(&self) -> usize {
        self.swapped.len() + self.unchanged.len() + self.errors.len()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.aborted.is_none()
    }
}

//! Git update options

use std::path::PathBuf;

/// Branch checked out in every submodule unless configured otherwise
pub const DEFAULT_BRANCH: &str = "master";

/// Options for the git-update command
#[derive(Debug, Clone)]
pub struct GitUpdateOptions {
    /// Repository working directory (empty = current directory)
    pub root: PathBuf,
    /// Branch to check out in each submodule
    pub branch: String,
}

impl Default for GitUpdateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl GitUpdateOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the branch to check out
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }
}

//! Git client backed by the `git` executable

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{GitClient, GitError};
use crate::infrastructure::process::describe_status;

/// Default git executable
pub const DEFAULT_GIT: &str = "git";

#[derive(Debug, Clone)]
pub struct CliGit {
    program: String,
    quiet: bool,
}

impl Default for CliGit {
    fn default() -> Self {
        Self::new(DEFAULT_GIT)
    }
}

impl CliGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            quiet: false,
        }
    }

    /// Discard git's own output (JSON mode)
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl GitClient for CliGit {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<(), GitError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null());
        // An empty path means the current directory.
        if !dir.as_os_str().is_empty() {
            cmd.current_dir(dir);
        }

        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd.status().map_err(|e| GitError::Launch {
            message: e.to_string(),
        })?;

        if !status.success() {
            return Err(GitError::ExitStatus {
                command: args.join(" "),
                status: describe_status(&status),
            });
        }
        Ok(())
    }
}

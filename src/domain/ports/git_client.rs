//! GitClient port
//!
//! Runs git subcommands in a given working directory. Git's own semantics
//! are opaque here: a call either succeeds or reports why it didn't.

use std::path::Path;

pub trait GitClient {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<(), GitError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GitError {
    #[error("failed to launch git: {message}")]
    Launch { message: String },

    #[error("`git {command}` exited with {status}")]
    ExitStatus { command: String, status: String },
}

impl<G: GitClient + ?Sized> GitClient for &G {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<(), GitError> {
        (**self).run(dir, args)
    }
}

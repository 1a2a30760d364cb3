//! Clean Use Case
//!
//! Empties a directory tree and optionally resets a build directory.
//!
//! This module handles:
//! - Previewing what a clean would remove
//! - Deleting every entry beneath the root while keeping the root itself
//! - Removing and recreating the reset directory

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{CleanAbort, CleanReport, SkippedEntry};
pub use use_case::CleanUseCase;

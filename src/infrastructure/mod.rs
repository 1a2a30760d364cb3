//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `rasterizer/` - External-process rasterizer
//! - `git/` - `git` executable client

pub mod fs;
pub mod git;
mod process;
pub mod rasterizer;

// Re-export for convenience
pub use fs::LocalFs;
pub use git::{CliGit, DEFAULT_GIT};
pub use rasterizer::{CommandRasterizer, DEFAULT_RASTERIZER};

//! contentkit - build and content utilities
//!
//! A small toolbox for asset-heavy projects:
//!
//! - **icons**: rasterize vector icons for Android, desktop and iOS naming
//!   conventions (or any configured profile) through an external tool
//! - **swap**: overwrite every same-named file in a tree with one input
//! - **clean**: empty a directory tree and optionally reset a build directory
//! - **git-update**: initialise submodules and pull each one on its branch
//!
//! The library follows a ports-and-adapters layout: `domain` holds pure
//! types and the ports, `application` the use cases, `infrastructure` the
//! filesystem, process and git adapters.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::Config;
pub use domain::value_objects::{ExportLayout, IconProfile, ResolutionSpec};
pub use error::{ContentKitError, ContentKitResult};

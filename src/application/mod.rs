//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `IconExportUseCase` - Renders a profile's vector sources to raster icons
//! - `SwapUseCase` - Overwrites same-named files with one input's content
//! - `CleanUseCase` - Empties a directory tree, optionally resetting a build dir
//! - `GitUpdateUseCase` - Refreshes every submodule of a repository

pub mod clean;
pub mod git_update;
pub mod icons;
pub mod swap;

pub use clean::{CleanAbort, CleanOptions, CleanReport, CleanUseCase, SkippedEntry};
pub use git_update::{GitFailure, GitUpdateOptions, GitUpdateReport, GitUpdateUseCase};
pub use icons::{ExportReport, FailedRender, IconExportOptions, IconExportUseCase, SourceError};
pub use swap::{SwapAbort, SwapReport, SwapUseCase};

//! Icon Export Module
//!
//! Rasterizes vector icons for every bucket and size an `IconProfile` requires.
//!
//! ## Structure
//!
//! - `options` - `IconExportOptions`
//! - `result` - `ExportReport`, `FailedRender`
//! - `use_case` - `IconExportUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use contentkit::application::icons::{IconExportOptions, IconExportUseCase};
//!
//! let use_case = IconExportUseCase::new(LocalFs::new(), CommandRasterizer::default());
//! let report = use_case.execute(&IconProfile::android(), &IconExportOptions::new(root), &sink);
//! ```

mod options;
mod result;
mod use_case;

pub use options::IconExportOptions;
pub use result::{ExportReport, FailedRender};
pub use use_case::{IconExportUseCase, SourceError};

//! Domain Layer
//!
//! Pure types and computations behind the utilities, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - IconSource, RenderTask
//! - `value_objects/` - IconProfile, ResolutionSpec, ExportLayout
//! - `services/` - export planning, `.gitmodules` parsing
//! - `ports/` - FileSystem, Rasterizer, GitClient, ToolEventSink
//!
//! All I/O goes through the trait-defined ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

//! Value Objects
//!
//! Immutable types describing export conventions.

pub mod export_layout;
pub mod hash;
pub mod icon_profile;
pub mod resolution_spec;

pub use export_layout::{ExportLayout, RASTER_EXTENSION};
pub use hash::ContentHash;
pub use icon_profile::{IconProfile, RenderPass, SizeSelector, BUILTIN_PROFILES};
pub use resolution_spec::{Bucket, ResolutionSpec};

//! Domain Entities

pub mod icon_source;
pub mod render_task;

pub use icon_source::{derive_base_name, IconSource};
pub use render_task::RenderTask;

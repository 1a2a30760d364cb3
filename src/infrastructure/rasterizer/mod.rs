//! Rasterizer Implementations

mod command;

pub use command::{CommandRasterizer, DEFAULT_RASTERIZER};

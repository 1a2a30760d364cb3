//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod git_client;
pub mod rasterizer;
pub mod tool_events;

pub use file_system::{FileSystem, FsError, FsResult};
pub use git_client::{GitClient, GitError};
pub use rasterizer::{RenderError, Rasterizer};
pub use tool_events::{RecordingEventSink, ToolEvent, ToolEventSink};

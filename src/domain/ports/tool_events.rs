//! Tool Event Port
//!
//! Every use case reports progress as a stream of events. The binary turns
//! them into console lines or an NDJSON stream; tests record them.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;

/// Event emitted while a utility runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ToolEvent {
    /// An input path is missing or unusable; the run stops early
    MissingInput { path: PathBuf, reason: String },

    /// Informational message that doesn't concern a single file
    Notice { message: String },

    /// Output directory was created
    DirectoryCreated { path: PathBuf },

    /// Output directory could not be created; its items are skipped
    DirectoryFailed { path: PathBuf, error: String },

    /// About to render an artifact
    Writing { path: PathBuf },

    /// Artifact already exists and was left alone
    SkippedExisting { path: PathBuf },

    /// The rasterizer failed for an artifact
    RenderFailed { path: PathBuf, error: String },

    /// File content was replaced
    Swapped { path: PathBuf },

    /// File already held the requested content
    Unchanged { path: PathBuf },

    /// File content could not be replaced
    SwapFailed { path: PathBuf, error: String },

    /// Entry removed (or would be removed in a dry run)
    Deleting { path: PathBuf },

    /// Entry could not be removed
    DeleteSkipped { path: PathBuf, error: String },

    /// Submodule update starting
    SubmoduleUpdating { path: PathBuf },

    /// Submodule directory could not be entered
    SubmoduleUnreachable { path: PathBuf },

    /// A git command failed
    GitFailed {
        dir: PathBuf,
        command: String,
        error: String,
    },
}

/// Trait for receiving tool events
pub trait ToolEventSink: Send + Sync {
    fn on_event(&self, event: ToolEvent);
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<ToolEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<ToolEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl ToolEventSink for RecordingEventSink {
    fn on_event(&self, event: ToolEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

//! JSON output utilities for CLI commands.
//!
//! Every line on stdout is one JSON object (NDJSON).

pub mod events;

use std::io::{self, Write};

use serde::Serialize;

use contentkit::domain::ports::{ToolEvent, ToolEventSink};

/// Write one serializable value as a single NDJSON line.
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Streams use case events to stdout as NDJSON
#[derive(Debug, Default)]
pub struct JsonEventSink;

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self
    }
}

impl ToolEventSink for JsonEventSink {
    fn on_event(&self, event: ToolEvent) {
        let _ = emit_event(&event);
    }
}

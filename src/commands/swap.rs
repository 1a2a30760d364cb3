//! Swap command handler

use std::path::Path;

use anyhow::Result;

use contentkit::application::swap::SwapUseCase;
use contentkit::infrastructure::LocalFs;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};

pub fn cmd_swap(input: &Path, root: &Path, ui: &UiContext) -> Result<usize> {
    let sink = ui.event_sink();

    if ui.json {
        emit_event(&StartEvent::new("swap"))?;
    }

    let report = SwapUseCase::new(LocalFs::new()).execute(input, root, sink.as_ref());

    if ui.json {
        emit_event(&CompleteEvent::new(
            "swap",
            report.is_success(),
            serde_json::json!({
                "swapped": report.swapped.len(),
                "unchanged": report.unchanged.len(),
                "failed": report.errors.len(),
                "aborted": report.aborted.as_ref().map(ToString::to_string),
            }),
        ))?;
    } else if report.aborted.is_none() {
        println!(
            "{} of {} matching file(s) swapped",
            report.swapped.len(),
            report.matched_count()
        );
    }

    Ok(report.errors.len() + usize::from(report.aborted.is_some()))
}

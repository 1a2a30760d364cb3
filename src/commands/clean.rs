//! Clean command handler
//!
//! Empties a directory tree after confirmation.

use std::path::PathBuf;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use contentkit::application::clean::{CleanOptions, CleanReport, CleanUseCase};
use contentkit::domain::ports::ToolEvent;
use contentkit::infrastructure::LocalFs;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};

pub fn cmd_clean(
    root: PathBuf,
    reset_build: Option<PathBuf>,
    yes: bool,
    dry_run: bool,
    ui: &UiContext,
) -> Result<usize> {
    let options = CleanOptions::new(root)
        .with_reset_dir(reset_build)
        .with_dry_run(dry_run);
    let use_case = CleanUseCase::new(LocalFs::new());
    let sink = ui.event_sink();

    if ui.json {
        emit_event(&StartEvent::new("clean"))?;
    }

    let preview = use_case.preview(&options);

    if dry_run || preview.aborted.is_some() {
        let report = use_case.execute(&options, sink.as_ref());
        if !ui.json {
            for path in &report.deleted {
                println!("would delete {}", path.display());
            }
            if let Some(reset) = &report.reset {
                println!("would reset {}", reset.display());
            }
        }
        return finish(&report, ui);
    }

    if preview.deleted.is_empty() && preview.reset.is_none() {
        sink.on_event(ToolEvent::Notice {
            message: format!("{} is already empty", options.root.display()),
        });
        return finish(&CleanReport::new(), ui);
    }

    if !yes && !confirm(&options, &preview, ui)? {
        if !ui.json {
            println!("Aborted.");
        }
        return Ok(0);
    }

    let report = use_case.execute(&options, sink.as_ref());
    finish(&report, ui)
}

fn confirm(options: &CleanOptions, preview: &CleanReport, ui: &UiContext) -> Result<bool> {
    if ui.json || !std::io::stdin().is_terminal() {
        bail!(
            "refusing to delete {} entries under {} without confirmation; pass --yes",
            preview.deleted.len(),
            options.root.display()
        );
    }

    let prompt = match &preview.reset {
        Some(reset) => format!(
            "Delete {} entries under {} and reset {}?",
            preview.deleted.len(),
            options.root.display(),
            reset.display()
        ),
        None => format!(
            "Delete {} entries under {}?",
            preview.deleted.len(),
            options.root.display()
        ),
    };

    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

fn finish(report: &CleanReport, ui: &UiContext) -> Result<usize> {
    if ui.json {
        emit_event(&CompleteEvent::new(
            "clean",
            report.is_success(),
            serde_json::json!({
                "dry_run": report.dry_run,
                "deleted": report.deleted.len(),
                "skipped": report.skipped.len(),
                "reset": report.reset,
                "aborted": report.aborted.as_ref().map(ToString::to_string),
            }),
        ))?;
    }
    Ok(report.skipped.len() + usize::from(report.aborted.is_some()))
}

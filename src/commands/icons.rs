//! Icons command handler

use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;

use contentkit::application::icons::{ExportReport, IconExportOptions, IconExportUseCase};
use contentkit::config::Config;
use contentkit::domain::ports::{ToolEvent, ToolEventSink};
use contentkit::infrastructure::{CommandRasterizer, LocalFs};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::theme::colors;

pub fn cmd_icons(
    config: &Config,
    profile_name: &str,
    root: Option<PathBuf>,
    rasterizer: Option<String>,
    dry_run: bool,
    ui: &UiContext,
) -> Result<usize> {
    let profile = config.profile(profile_name)?;

    let program = rasterizer.unwrap_or_else(|| config.rasterizer.command.clone());
    let rasterizer = CommandRasterizer::new(program)
        .with_leading_args(config.rasterizer.args.clone())
        .with_quiet(ui.json);

    let options = IconExportOptions::new(root.unwrap_or_default()).with_dry_run(dry_run);
    let use_case = IconExportUseCase::new(LocalFs::new(), &rasterizer);
    let sink = ui.event_sink();

    if ui.json {
        emit_event(&StartEvent::new("icons"))?;
    }

    if !dry_run && !rasterizer.check_available() {
        sink.on_event(ToolEvent::Notice {
            message: format!(
                "rasterizer '{}' did not answer --version; renders may fail",
                rasterizer.program()
            ),
        });
    }

    let report = use_case.execute(&profile, &options, sink.as_ref());

    if ui.json {
        emit_event(&CompleteEvent::new(
            "icons",
            report.is_success(),
            serde_json::json!({
                "profile": report.profile,
                "dry_run": report.dry_run,
                "written": report.written.len(),
                "skipped": report.skipped.len(),
                "failed": report.failed.len(),
            }),
        ))?;
    } else {
        print_summary(&report, ui);
    }

    Ok(report.failed.len() + usize::from(report.missing_input.is_some()))
}

fn print_summary(report: &ExportReport, ui: &UiContext) {
    if report.missing_input.is_some() {
        return;
    }

    let verb = if report.dry_run { "would write" } else { "wrote" };
    let summary = format!(
        "{}: {} {}, {} already present, {} failed",
        report.profile,
        verb,
        report.written.len(),
        report.skipped.len(),
        report.failed.len()
    );

    if !ui.color {
        println!("{summary}");
    } else if report.is_success() {
        println!("{}", summary.with(colors::SUCCESS));
    } else {
        println!("{}", summary.with(colors::WARNING));
    }
}

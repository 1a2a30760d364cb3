//! Git update command handler

use std::path::PathBuf;

use anyhow::Result;

use contentkit::application::git_update::{GitUpdateOptions, GitUpdateUseCase};
use contentkit::config::Config;
use contentkit::infrastructure::{CliGit, LocalFs};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};

pub fn cmd_git_update(
    config: &Config,
    root: Option<PathBuf>,
    branch: Option<String>,
    ui: &UiContext,
) -> Result<usize> {
    let git = CliGit::new(config.git.command.clone()).with_quiet(ui.json);
    let options = GitUpdateOptions::new(root.unwrap_or_default())
        .with_branch(branch.unwrap_or_else(|| config.git.branch.clone()));
    let sink = ui.event_sink();

    if ui.json {
        emit_event(&StartEvent::new("git-update"))?;
    }

    let report = GitUpdateUseCase::new(LocalFs::new(), git).execute(&options, sink.as_ref());

    if ui.json {
        emit_event(&CompleteEvent::new(
            "git-update",
            report.is_success(),
            serde_json::json!({
                "branch": options.branch,
                "updated": report.updated.len(),
                "unreachable": report.unreachable.len(),
                "failed": report.failures.len(),
                "missing_gitmodules": report.missing_gitmodules,
                "unreadable_gitmodules": report.unreadable_gitmodules,
            }),
        ))?;
    } else if !report.missing_gitmodules
        && report.unreadable_gitmodules.is_none()
        && ui.verbose > 0
    {
        println!(
            "{} submodule(s) updated, {} unreachable, {} git failure(s)",
            report.updated.len(),
            report.unreachable.len(),
            report.failures.len()
        );
    }

    Ok(report.failures.len()
        + report.unreachable.len()
        + usize::from(report.unreadable_gitmodules.is_some()))
}

//! Human-readable rendering of use case events

use std::io::Write;
use std::path::Path;

use crossterm::style::Stylize;

use contentkit::domain::ports::{ToolEvent, ToolEventSink};

use crate::ui::theme::{colors, Icon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One rendered console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub stream: Stream,
    pub icon: Option<Icon>,
    pub text: String,
    /// Secondary information, dimmed
    pub dim: bool,
}

impl Line {
    fn out(text: String) -> Self {
        Self {
            stream: Stream::Stdout,
            icon: None,
            text,
            dim: false,
        }
    }

    fn dim(text: String) -> Self {
        Self {
            dim: true,
            ..Self::out(text)
        }
    }

    fn problem(icon: Icon, text: String) -> Self {
        Self {
            stream: Stream::Stderr,
            icon: Some(icon),
            text,
            dim: false,
        }
    }
}

/// Render an event, or nothing when it is below the verbosity threshold.
pub fn render_event(event: &ToolEvent, verbose: u8) -> Option<Line> {
    let line = match event {
        ToolEvent::MissingInput { reason, .. } => Line::problem(Icon::Warning, reason.clone()),
        ToolEvent::Notice { message } => Line::out(message.clone()),
        ToolEvent::DirectoryCreated { path } if verbose > 0 => {
            Line::dim(format!("created {}", path.display()))
        }
        ToolEvent::DirectoryCreated { .. } => return None,
        ToolEvent::DirectoryFailed { path, error } => Line::problem(
            Icon::Warning,
            format!("could not create {}: {}", path.display(), error),
        ),
        ToolEvent::Writing { path } => Line::out(format!("writing ==> {}", path.display())),
        ToolEvent::SkippedExisting { path } if verbose > 0 => {
            Line::dim(format!("Skipped {}", path.display()))
        }
        ToolEvent::SkippedExisting { .. } => return None,
        ToolEvent::RenderFailed { path, error } => {
            Line::problem(Icon::Error, format!("{}: {}", path.display(), error))
        }
        ToolEvent::Swapped { path } => Line::out(format!("swapped ==> {}", path.display())),
        ToolEvent::Unchanged { path } if verbose > 0 => {
            Line::dim(format!("unchanged {}", path.display()))
        }
        ToolEvent::Unchanged { .. } => return None,
        ToolEvent::SwapFailed { path, error } => {
            Line::problem(Icon::Error, format!("{}: {}", path.display(), error))
        }
        ToolEvent::Deleting { path } => Line::out(format!("==> Deleting {}", path.display())),
        ToolEvent::DeleteSkipped { path, error } if verbose > 0 => Line::problem(
            Icon::Warning,
            format!("==> Skipped {} ({})", path.display(), error),
        ),
        ToolEvent::DeleteSkipped { path, .. } => {
            Line::problem(Icon::Warning, format!("==> Skipped {}", path.display()))
        }
        ToolEvent::SubmoduleUpdating { path } => Line::out(format!("==> {}", path.display())),
        ToolEvent::SubmoduleUnreachable { path } => Line::problem(
            Icon::Warning,
            format!("Could not change directory to {}", path.display()),
        ),
        ToolEvent::GitFailed {
            dir,
            command,
            error,
        } => Line::problem(
            Icon::Error,
            format!("git {} failed in {}: {}", command, shown_dir(dir), error),
        ),
    };
    Some(line)
}

fn shown_dir(dir: &Path) -> std::path::Display<'_> {
    if dir.as_os_str().is_empty() {
        Path::new(".").display()
    } else {
        dir.display()
    }
}

/// Writes events as console lines
#[derive(Debug, Clone, Copy)]
pub struct ConsoleEventSink {
    verbose: u8,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn new(verbose: u8, color: bool, unicode: bool) -> Self {
        Self {
            verbose,
            color,
            unicode,
        }
    }

    fn format(&self, line: &Line) -> String {
        let icon = line.icon.map(|icon| {
            let glyph = icon.glyph(self.unicode);
            if self.color {
                format!("{} ", glyph.with(icon.color()))
            } else {
                format!("{glyph} ")
            }
        });
        let text = if self.color && line.dim {
            line.text.as_str().with(colors::DIM).to_string()
        } else {
            line.text.clone()
        };
        format!("{}{}", icon.unwrap_or_default(), text)
    }
}

impl ToolEventSink for ConsoleEventSink {
    fn on_event(&self, event: ToolEvent) {
        let Some(line) = render_event(&event, self.verbose) else {
            return;
        };
        let text = self.format(&line);
        // Broken pipes are not worth aborting a run over.
        let _ = match line.stream {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{text}"),
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{text}"),
        };
    }
}

//! Clean Use Case
//!
//! Removes everything beneath a root directory, keeping the root itself.

use std::path::Path;

use crate::domain::ports::{FileSystem, ToolEvent, ToolEventSink};

use super::options::CleanOptions;
use super::result::{CleanAbort, CleanReport};

/// Clean use case - empties a directory tree
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// List what a clean would remove without deleting anything
    ///
    /// Allows the caller to confirm before calling [`Self::execute`].
    pub fn preview(&self, options: &CleanOptions) -> CleanReport {
        let mut report = CleanReport {
            dry_run: true,
            ..CleanReport::default()
        };

        if let Err(abort) = self.check_root(&options.root) {
            report.aborted = Some(abort);
            return report;
        }

        match self.fs.list_dir(&options.root) {
            Ok(children) => report.deleted = children,
            Err(e) => report.add_skipped(options.root.clone(), e.to_string()),
        }
        if let Some(reset) = &options.reset_dir {
            if self.fs.is_dir(reset) {
                report.reset = Some(reset.clone());
            }
        }
        report
    }

    /// Execute the clean
    ///
    /// With `dry_run` set this is the same as [`Self::preview`].
    pub fn execute(&self, options: &CleanOptions, sink: &dyn ToolEventSink) -> CleanReport {
        if options.dry_run {
            let report = self.preview(options);
            if let Some(abort) = &report.aborted {
                sink.on_event(ToolEvent::MissingInput {
                    path: options.root.clone(),
                    reason: abort.to_string(),
                });
            }
            return report;
        }

        let mut report = CleanReport::new();

        if let Err(abort) = self.check_root(&options.root) {
            sink.on_event(ToolEvent::MissingInput {
                path: options.root.clone(),
                reason: abort.to_string(),
            });
            report.aborted = Some(abort);
            return report;
        }

        self.clean_children(&options.root, &mut report, sink);

        if let Some(reset) = &options.reset_dir {
            self.reset_dir(reset, &mut report, sink);
        }

        report
    }

    fn check_root(&self, root: &Path) -> Result<(), CleanAbort> {
        if root.has_root() && root.parent().is_none() {
            return Err(CleanAbort::FilesystemRoot(root.to_path_buf()));
        }
        if !self.fs.is_dir(root) {
            return Err(CleanAbort::MissingRoot(root.to_path_buf()));
        }
        Ok(())
    }

    /// Delete every child of `dir`. A directory that resists recursive
    /// removal is descended into so that whatever can go, goes.
    fn clean_children(&self, dir: &Path, report: &mut CleanReport, sink: &dyn ToolEventSink) {
        let children = match self.fs.list_dir(dir) {
            Ok(children) => children,
            Err(e) => {
                sink.on_event(ToolEvent::DeleteSkipped {
                    path: dir.to_path_buf(),
                    error: e.to_string(),
                });
                report.add_skipped(dir.to_path_buf(), e.to_string());
                return;
            }
        };

        for child in children {
            let removed = if self.fs.is_dir(&child) {
                self.fs.remove_dir_all(&child)
            } else {
                self.fs.remove_file(&child)
            };

            match removed {
                Ok(()) => {
                    sink.on_event(ToolEvent::Deleting {
                        path: child.clone(),
                    });
                    report.add_deleted(child);
                }
                Err(e) => {
                    sink.on_event(ToolEvent::DeleteSkipped {
                        path: child.clone(),
                        error: e.to_string(),
                    });
                    report.add_skipped(child.clone(), e.to_string());
                    if self.fs.is_dir(&child) {
                        self.clean_children(&child, report, sink);
                    }
                }
            }
        }
    }

    fn reset_dir(&self, reset: &Path, report: &mut CleanReport, sink: &dyn ToolEventSink) {
        if !self.fs.is_dir(reset) {
            return;
        }

        let recreated = self
            .fs
            .remove_dir_all(reset)
            .and_then(|()| self.fs.create_dir_all(reset));

        match recreated {
            Ok(()) => {
                sink.on_event(ToolEvent::Deleting {
                    path: reset.to_path_buf(),
                });
                report.reset = Some(reset.to_path_buf());
            }
            Err(e) => {
                sink.on_event(ToolEvent::DeleteSkipped {
                    path: reset.to_path_buf(),
                    error: e.to_string(),
                });
                report.add_skipped(reset.to_path_buf(), e.to_string());
            }
        }
    }
}

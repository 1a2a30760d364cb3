//! Icon Export Use Case
//!
//! Enumerates sources, plans the (source × bucket × size) cross product and
//! makes sure every planned raster exists. Existing files are never
//! re-rendered, so repeated runs converge on the same file set.

use std::path::{Path, PathBuf};

use crate::domain::entities::{IconSource, RenderTask};
use crate::domain::ports::{FileSystem, Rasterizer, ToolEvent, ToolEventSink};
use crate::domain::services::{plan_exports, BucketPlan, ExportPlan};
use crate::domain::value_objects::{IconProfile, RenderPass};

use super::options::IconExportOptions;
use super::result::ExportReport;

/// Why source enumeration stopped before anything was planned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    pub path: PathBuf,
    pub reason: String,
}

/// Icon export use case
pub struct IconExportUseCase<FS, R>
where
    FS: FileSystem,
    R: Rasterizer,
{
    fs: FS,
    rasterizer: R,
}

impl<FS, R> IconExportUseCase<FS, R>
where
    FS: FileSystem,
    R: Rasterizer,
{
    /// Create a new icon export use case
    pub fn new(fs: FS, rasterizer: R) -> Self {
        Self { fs, rasterizer }
    }

    /// Enumerate the sources of every pass, in pass order.
    ///
    /// The first pass's source directory is required. A later pass whose
    /// directory is missing contributes no sources and is announced as a
    /// notice.
    pub fn enumerate_sources(
        &self,
        profile: &IconProfile,
        root: &Path,
        sink: &dyn ToolEventSink,
    ) -> Result<Vec<Vec<IconSource>>, SourceError> {
        let mut sources = Vec::with_capacity(profile.passes().len());

        for (index, pass) in profile.passes().iter().enumerate() {
            let dir = root.join(&pass.source_dir);
            if index > 0 && !self.fs.is_dir(&dir) {
                sink.on_event(ToolEvent::Notice {
                    message: format!("no such directory, {}; no sources from it", dir.display()),
                });
                sources.push(Vec::new());
                continue;
            }
            sources.push(self.enumerate_pass(pass, &dir)?);
        }

        Ok(sources)
    }

    fn enumerate_pass(&self, pass: &RenderPass, dir: &Path) -> Result<Vec<IconSource>, SourceError> {
        if !self.fs.is_dir(dir) {
            return Err(SourceError {
                reason: format!("no such directory, {}", dir.display()),
                path: dir.to_path_buf(),
            });
        }

        let entries = self.fs.list_dir(dir).map_err(|e| SourceError {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(entries
            .into_iter()
            .filter(|p| has_extension(p, &pass.extension) && self.fs.is_file(p))
            .filter_map(|p| IconSource::from_path(p, pass.strip_suffix.as_deref()))
            .collect())
    }

    /// Compute the full plan without touching the output tree
    pub fn plan(
        &self,
        profile: &IconProfile,
        options: &IconExportOptions,
        sink: &dyn ToolEventSink,
    ) -> Result<ExportPlan, SourceError> {
        let sources = self.enumerate_sources(profile, &options.root, sink)?;
        let output_dir = options.root.join(profile.output_dir());
        Ok(plan_exports(profile, &output_dir, &sources))
    }

    /// Run the export.
    ///
    /// Never fails as a whole: problems are recorded in the report and the
    /// run moves on to the next artifact.
    pub fn execute(
        &self,
        profile: &IconProfile,
        options: &IconExportOptions,
        sink: &dyn ToolEventSink,
    ) -> ExportReport {
        let mut report = ExportReport::new(profile.name(), options.dry_run);

        let plan = match self.plan(profile, options, sink) {
            Ok(plan) => plan,
            Err(err) => {
                sink.on_event(ToolEvent::MissingInput {
                    path: err.path.clone(),
                    reason: err.reason,
                });
                report.missing_input = Some(err.path);
                return report;
            }
        };

        for skipped in &plan.skipped {
            sink.on_event(ToolEvent::Notice {
                message: format!(
                    "bucket '{}' has {} size(s), no size #{} for {}",
                    skipped.bucket,
                    skipped.available,
                    skipped.index,
                    skipped.source_dir.display()
                ),
            });
        }

        for duplicate in &plan.duplicates {
            sink.on_event(ToolEvent::Notice {
                message: format!(
                    "{} also maps to {}, rendered from an earlier source; skipped",
                    duplicate.source.display(),
                    duplicate.destination.display()
                ),
            });
        }

        for bucket in &plan.buckets {
            if !self.ensure_dir(&bucket.directory, options.dry_run, &mut report, sink) {
                for task in &bucket.tasks {
                    report.add_failed(
                        task.destination().to_path_buf(),
                        format!("output directory {} unavailable", bucket.directory.display()),
                    );
                }
                continue;
            }

            for task in &bucket.tasks {
                self.run_task(task, bucket, options.dry_run, &mut report, sink);
            }
        }

        report
    }

    fn run_task(
        &self,
        task: &RenderTask,
        bucket: &BucketPlan,
        dry_run: bool,
        report: &mut ExportReport,
        sink: &dyn ToolEventSink,
    ) {
        let destination = task.destination();

        if self.fs.exists(destination) {
            sink.on_event(ToolEvent::SkippedExisting {
                path: destination.to_path_buf(),
            });
            report.skipped.push(destination.to_path_buf());
            return;
        }

        // Per-icon layouts nest one level below the bucket directory.
        if let Some(parent) = destination.parent() {
            if parent != bucket.directory && !self.ensure_dir(parent, dry_run, report, sink) {
                report.add_failed(
                    destination.to_path_buf(),
                    format!("output directory {} unavailable", parent.display()),
                );
                return;
            }
        }

        sink.on_event(ToolEvent::Writing {
            path: destination.to_path_buf(),
        });

        if dry_run {
            report.written.push(destination.to_path_buf());
            return;
        }

        match self
            .rasterizer
            .render(task.source().path(), destination, task.size(), task.size())
        {
            Ok(()) => report.written.push(destination.to_path_buf()),
            Err(e) => {
                sink.on_event(ToolEvent::RenderFailed {
                    path: destination.to_path_buf(),
                    error: e.to_string(),
                });
                report.add_failed(destination.to_path_buf(), e.to_string());
            }
        }
    }

    /// Make sure `dir` exists. Returns false when it can't be created.
    fn ensure_dir(
        &self,
        dir: &Path,
        dry_run: bool,
        report: &mut ExportReport,
        sink: &dyn ToolEventSink,
    ) -> bool {
        if self.fs.is_dir(dir) || report.created_dirs.iter().any(|d| d == dir) {
            return true;
        }

        if !dry_run {
            if let Err(e) = self.fs.create_dir_all(dir) {
                sink.on_event(ToolEvent::DirectoryFailed {
                    path: dir.to_path_buf(),
                    error: e.to_string(),
                });
                return false;
            }
        }

        sink.on_event(ToolEvent::DirectoryCreated {
            path: dir.to_path_buf(),
        });
        report.created_dirs.push(dir.to_path_buf());
        true
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension.trim_start_matches('.')))
}

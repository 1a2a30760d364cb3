//! Swap Use Case
//!
//! Walks the root directory and rewrites every file whose name equals the
//! input file's name.

use std::path::Path;

use crate::domain::ports::{FileSystem, ToolEvent, ToolEventSink};
use crate::domain::value_objects::ContentHash;

use super::result::{SwapAbort, SwapReport};

/// Swap use case - overwrites same-named files with one input's content
pub struct SwapUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> SwapUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Run the swap
    pub fn execute(&self, input: &Path, root: &Path, sink: &dyn ToolEventSink) -> SwapReport {
        let mut report = SwapReport::default();

        let content = match self.load_input(input, root) {
            Ok(content) => content,
            Err(abort) => {
                sink.on_event(ToolEvent::MissingInput {
                    path: match &abort {
                        SwapAbort::MissingRoot(p) => p.clone(),
                        _ => input.to_path_buf(),
                    },
                    reason: abort.to_string(),
                });
                report.aborted = Some(abort);
                return report;
            }
        };

        let Some(file_name) = input.file_name() else {
            let abort = SwapAbort::MissingInput(input.to_path_buf());
            sink.on_event(ToolEvent::MissingInput {
                path: input.to_path_buf(),
                reason: abort.to_string(),
            });
            report.aborted = Some(abort);
            return report;
        };

        let files = match self.fs.walk_files(root) {
            Ok(files) => files,
            Err(e) => {
                let abort = SwapAbort::MissingRoot(root.to_path_buf());
                sink.on_event(ToolEvent::MissingInput {
                    path: root.to_path_buf(),
                    reason: e.to_string(),
                });
                report.aborted = Some(abort);
                return report;
            }
        };

        let wanted_hash = ContentHash::from_bytes(&content);

        for path in files.iter().filter(|p| p.file_name() == Some(file_name)) {
            if self.fs.hash(path).is_ok_and(|h| h == wanted_hash) {
                sink.on_event(ToolEvent::Unchanged { path: path.clone() });
                report.unchanged.push(path.clone());
                continue;
            }

            match self.fs.write_bytes(path, &content) {
                Ok(()) => {
                    sink.on_event(ToolEvent::Swapped { path: path.clone() });
                    report.swapped.push(path.clone());
                }
                Err(e) => {
                    sink.on_event(ToolEvent::SwapFailed {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                    report
                        .errors
                        .push(format!("Failed to write {}: {}", path.display(), e));
                }
            }
        }

        report
    }

    fn load_input(&self, input: &Path, root: &Path) -> Result<Vec<u8>, SwapAbort> {
        if !self.fs.is_file(input) {
            return Err(SwapAbort::MissingInput(input.to_path_buf()));
        }
        if !self.fs.is_dir(root) {
            return Err(SwapAbort::MissingRoot(root.to_path_buf()));
        }

        let content = self
            .fs
            .read_bytes(input)
            .map_err(|e| SwapAbort::UnreadableInput {
                path: input.to_path_buf(),
                error: e.to_string(),
            })?;

        if content.is_empty() {
            return Err(SwapAbort::EmptyInput(input.to_path_buf()));
        }
        Ok(content)
    }
}

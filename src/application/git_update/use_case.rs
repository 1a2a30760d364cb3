//! Git Update Use Case

use std::path::Path;

use crate::domain::ports::{FileSystem, FsError, GitClient, ToolEvent, ToolEventSink};
use crate::domain::services::parse_submodule_paths;

use super::options::GitUpdateOptions;
use super::result::GitUpdateReport;

/// Git update use case - refreshes every submodule of a repository
pub struct GitUpdateUseCase<FS, G>
where
    FS: FileSystem,
    G: GitClient,
{
    fs: FS,
    git: G,
}

impl<FS, G> GitUpdateUseCase<FS, G>
where
    FS: FileSystem,
    G: GitClient,
{
    pub fn new(fs: FS, git: G) -> Self {
        Self { fs, git }
    }

    pub fn execute(&self, options: &GitUpdateOptions, sink: &dyn ToolEventSink) -> GitUpdateReport {
        let mut report = GitUpdateReport::new();
        let root = options.root.as_path();

        self.run_git(root, &["submodule", "init"], &mut report, sink);
        self.run_git(
            root,
            &["submodule", "update", "--init", "--merge"],
            &mut report,
            sink,
        );

        let gitmodules = root.join(".gitmodules");
        let content = match self.fs.read_bytes(&gitmodules) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(FsError::NotFound(_)) => {
                let shown = if root.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    root
                };
                sink.on_event(ToolEvent::Notice {
                    message: format!(
                        "No .gitmodules found in {}, nothing to update",
                        shown.display()
                    ),
                });
                report.missing_gitmodules = true;
                return report;
            }
            Err(e) => {
                sink.on_event(ToolEvent::MissingInput {
                    path: gitmodules.clone(),
                    reason: format!("cannot read {}: {}", gitmodules.display(), e),
                });
                report.unreadable_gitmodules = Some(e.to_string());
                return report;
            }
        };

        let checkout = ["checkout", options.branch.as_str()];
        for path in parse_submodule_paths(&content) {
            let dir = root.join(&path);
            if !self.fs.is_dir(&dir) {
                sink.on_event(ToolEvent::SubmoduleUnreachable { path: dir.clone() });
                report.unreachable.push(dir);
                continue;
            }

            sink.on_event(ToolEvent::SubmoduleUpdating { path: dir.clone() });
            self.run_git(&dir, &checkout, &mut report, sink);
            self.run_git(&dir, &["pull"], &mut report, sink);
            report.updated.push(dir);
        }

        report
    }

    fn run_git(
        &self,
        dir: &Path,
        args: &[&str],
        report: &mut GitUpdateReport,
        sink: &dyn ToolEventSink,
    ) {
        if let Err(e) = self.git.run(dir, args) {
            let command = args.join(" ");
            sink.on_event(ToolEvent::GitFailed {
                dir: dir.to_path_buf(),
                command: command.clone(),
                error: e.to_string(),
            });
            report.add_failure(dir.to_path_buf(), command, e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{GitError, RecordingEventSink};
    use crate::infrastructure::LocalFs;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct FakeGit {
        calls: Mutex<Vec<(PathBuf, String)>>,
        fail_on: Option<&'static str>,
    }

    impl FakeGit {
        fn failing_on(command: &'static str) -> Self {
            Self {
                fail_on: Some(command),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<(PathBuf, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl GitClient for FakeGit {
        fn run(&self, dir: &Path, args: &[&str]) -> Result<(), GitError> {
            let command = args.join(" ");
            self.calls
                .lock()
                .unwrap()
                .push((dir.to_path_buf(), command.clone()));
            if self.fail_on == Some(command.as_str()) {
                return Err(GitError::ExitStatus {
                    command,
                    status: "exit code 1".to_string(),
                });
            }
            Ok(())
        }
    }

    const GITMODULES: &str = "[submodule \"Extern/zlib\"]\n\tpath = Extern/zlib\n\turl = https://example.com/zlib.git\n[submodule \"Extern/png\"]\n\tpath = Extern/png\n\turl = https://example.com/png.git\n";

    #[test]
    fn updates_every_submodule_in_order() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".gitmodules"), GITMODULES).unwrap();
        std::fs::create_dir_all(dir.path().join("Extern/zlib")).unwrap();
        std::fs::create_dir_all(dir.path().join("Extern/png")).unwrap();

        let git = FakeGit::default();
        let sink = RecordingEventSink::new();
        let report = GitUpdateUseCase::new(LocalFs::new(), &git)
            .execute(&GitUpdateOptions::new(dir.path()), &sink);

        assert!(report.is_success());
        let zlib = dir.path().join("Extern/zlib");
        let png = dir.path().join("Extern/png");
        assert_eq!(
            git.calls(),
            vec![
                (dir.path().to_path_buf(), "submodule init".to_string()),
                (
                    dir.path().to_path_buf(),
                    "submodule update --init --merge".to_string()
                ),
                (zlib.clone(), "checkout master".to_string()),
                (zlib.clone(), "pull".to_string()),
                (png.clone(), "checkout master".to_string()),
                (png.clone(), "pull".to_string()),
            ]
        );
        assert_eq!(report.updated, vec![zlib, png]);
    }

    #[test]
    fn missing_gitmodules_stops_after_submodule_commands() {
        let dir = tempdir().unwrap();
        let git = FakeGit::default();
        let sink = RecordingEventSink::new();

        let report = GitUpdateUseCase::new(LocalFs::new(), &git)
            .execute(&GitUpdateOptions::new(dir.path()), &sink);

        assert!(report.missing_gitmodules);
        assert_eq!(git.calls().len(), 2);
        assert!(matches!(
            sink.events().as_slice(),
            [ToolEvent::Notice { message }] if message.starts_with("No .gitmodules found in")
        ));
    }

    #[test]
    fn unreadable_gitmodules_is_not_reported_as_absent() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".gitmodules")).unwrap();
        let git = FakeGit::default();
        let sink = RecordingEventSink::new();

        let report = GitUpdateUseCase::new(LocalFs::new(), &git)
            .execute(&GitUpdateOptions::new(dir.path()), &sink);

        assert!(!report.missing_gitmodules);
        assert!(report.unreadable_gitmodules.is_some());
        assert!(!report.is_success());
        assert!(matches!(
            sink.events().as_slice(),
            [ToolEvent::MissingInput { path, reason }]
                if path == &dir.path().join(".gitmodules") && reason.starts_with("cannot read")
        ));
    }

    #[test]
    fn unreachable_submodule_is_skipped() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".gitmodules"), GITMODULES).unwrap();
        std::fs::create_dir_all(dir.path().join("Extern/png")).unwrap();

        let git = FakeGit::default();
        let report = GitUpdateUseCase::new(LocalFs::new(), &git)
            .execute(&GitUpdateOptions::new(dir.path()), &RecordingEventSink::new());

        assert_eq!(report.unreachable, vec![dir.path().join("Extern/zlib")]);
        assert_eq!(report.updated, vec![dir.path().join("Extern/png")]);
        assert!(!git
            .calls()
            .iter()
            .any(|(d, _)| d == &dir.path().join("Extern/zlib")));
    }

    #[test]
    fn failures_are_recorded_and_run_continues() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".gitmodules"), GITMODULES).unwrap();
        std::fs::create_dir_all(dir.path().join("Extern/zlib")).unwrap();
        std::fs::create_dir_all(dir.path().join("Extern/png")).unwrap();

        let git = FakeGit::failing_on("pull");
        let report = GitUpdateUseCase::new(LocalFs::new(), &git)
            .execute(&GitUpdateOptions::new(dir.path()), &RecordingEventSink::new());

        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.updated.len(), 2);
        assert_eq!(report.failures[0].command, "pull");
        assert!(!report.is_success());
    }

    #[test]
    fn custom_branch_is_checked_out() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".gitmodules"), "path = lib\n").unwrap();
        std::fs::create_dir_all(dir.path().join("lib")).unwrap();

        let git = FakeGit::default();
        let options = GitUpdateOptions::new(dir.path()).with_branch("main");
        GitUpdateUseCase::new(LocalFs::new(), &git).execute(&options, &RecordingEventSink::new());

        assert!(git
            .calls()
            .contains(&(dir.path().join("lib"), "checkout main".to_string())));
    }
}

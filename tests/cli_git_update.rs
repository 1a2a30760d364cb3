//! Integration tests for `contentkit git-update`
//!
//! `CONTENTKIT_GIT` points at `true`/`false` so no real repository is needed.

#![cfg(unix)]

mod common;

use common::*;

#[test]
fn missing_gitmodules_is_a_notice() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["git-update"], &[("CONTENTKIT_GIT", "true")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("No .gitmodules found in ., nothing to update"));
}

#[test]
fn visits_each_submodule() {
    let env = TestEnv::new();
    env.write_project_file(".gitmodules", GITMODULES);
    env.create_subdirectories(&["Extern/zlib", "Extern/png"]);

    let result = env.run_with_env(&["git-update"], &[("CONTENTKIT_GIT", "true")]);

    assert!(result.success, "{}", result.combined_output());
    let zlib = result.stdout.find("==> Extern/zlib").expect("zlib visited");
    let png = result.stdout.find("==> Extern/png").expect("png visited");
    assert!(zlib < png);
}

#[test]
fn unreachable_submodule_is_skipped() {
    let env = TestEnv::new();
    env.write_project_file(".gitmodules", GITMODULES);
    env.create_subdirectories(&["Extern/png"]);

    let result = env.run_with_env(&["git-update"], &[("CONTENTKIT_GIT", "true")]);

    assert!(result.success);
    assert!(result
        .stderr
        .contains("Could not change directory to Extern/zlib"));
    assert!(result.stdout.contains("==> Extern/png"));
}

#[test]
fn git_failures_only_fail_under_strict() {
    let env = TestEnv::new();
    env.write_project_file(".gitmodules", GITMODULES);
    env.create_subdirectories(&["Extern/zlib", "Extern/png"]);

    let result = env.run_with_env(&["git-update"], &[("CONTENTKIT_GIT", "false")]);
    assert!(result.success);
    assert!(result.stderr.contains("git submodule init failed"));

    let strict = env.run_with_env(&["git-update", "--strict"], &[("CONTENTKIT_GIT", "false")]);
    assert_eq!(strict.exit_code, 1);
}

#[test]
fn json_summary_carries_branch() {
    let env = TestEnv::new();
    env.write_project_file(".gitmodules", "path = lib\n");
    env.create_subdirectories(&["lib"]);

    let result = env.run_with_env(
        &["--json", "git-update", "--branch", "main"],
        &[("CONTENTKIT_GIT", "true")],
    );

    let events = result.json_lines();
    assert!(events
        .iter()
        .any(|e| e["event"] == "submodule_updating" && e["path"] == "lib"));
    let complete = events.last().unwrap();
    assert_eq!(complete["branch"], "main");
    assert_eq!(complete["updated"], 1);
}

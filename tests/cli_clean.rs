//! Integration tests for `contentkit clean`

mod common;

use common::*;

fn populated() -> TestEnv {
    let env = TestEnv::new();
    env.write_project_file("out/obj/main.o", "o");
    env.write_project_file("out/app.exe", "exe");
    env.write_project_file("out/.cache/x", "x");
    env
}

#[test]
fn yes_deletes_everything_below_root() {
    let env = populated();

    let result = env.run(&["clean", "out", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("out").is_dir());
    assert!(env.list_files("out").is_empty());
    assert!(result.stdout.contains("==> Deleting out/obj"));
    assert!(result.stdout.contains("==> Deleting out/app.exe"));
}

#[test]
fn refuses_without_confirmation_when_not_interactive() {
    let env = populated();

    let result = env.run(&["clean", "out"]);

    assert!(!result.success);
    assert!(result.stderr.contains("--yes"), "stderr: {}", result.stderr);
    assert_eq!(env.list_files("out").len(), 3);
}

#[test]
fn dry_run_deletes_nothing() {
    let env = populated();

    let result = env.run(&["clean", "out", "--dry-run"]);

    assert!(result.success);
    assert!(result.stdout.contains("would delete out/obj"));
    assert_eq!(env.list_files("out").len(), 3);
}

#[test]
fn reset_build_recreates_directory() {
    let env = populated();
    env.write_project_file("Build/CMakeCache.txt", "cache");

    let result = env.run(&["clean", "out", "--reset-build", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("Build").is_dir());
    assert!(env.list_files("Build").is_empty());
    assert!(result.stdout.contains("==> Deleting Build"));
}

#[test]
fn missing_root_is_reported() {
    let env = TestEnv::new();

    let result = env.run(&["clean", "gone", "--yes"]);

    assert!(result.success);
    assert!(result.stderr.contains("no such directory, gone"));
}

#[test]
fn json_requires_yes() {
    let env = populated();

    let result = env.run(&["--json", "clean", "out"]);

    assert!(!result.success);
    let events = result.json_lines();
    assert_eq!(events.last().unwrap()["event"], "error");
}

#[test]
fn json_clean_summary() {
    let env = populated();

    let result = env.run(&["--json", "clean", "out", "--yes"]);

    assert!(result.success);
    let events = result.json_lines();
    assert_eq!(
        events.iter().filter(|e| e["event"] == "deleting").count(),
        3
    );
    assert_eq!(events.last().unwrap()["deleted"], 3);
}

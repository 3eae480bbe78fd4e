//! Dry-run tests: a dry run never creates, modifies, or deletes anything

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn groundwork_cmd() -> Command {
    let mut cmd = Command::cargo_bin("groundwork").unwrap();
    cmd.env_remove("CI");
    cmd
}

#[test]
fn test_dry_run_on_empty_directory_creates_nothing() {
    let project = common::TestProject::new();
    let before = project.snapshot();

    groundwork_cmd()
        .current_dir(&project.path)
        .args(["install", "--yes", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("No files written"));

    assert_eq!(before, project.snapshot());
    assert!(before.is_empty());
}

#[test]
fn test_dry_run_on_populated_directory_changes_nothing() {
    let project = common::TestProject::new();
    project.write_file(".cursorrules", "existing rules");
    project.write_file("groundwork.json", "{\"custom\": true}");
    project.write_file(".groundwork/context.json", "{\"projectName\": \"old\"}");
    project.write_file("src/lib.rs", "pub fn hello() {}");
    let before = project.snapshot();

    groundwork_cmd()
        .current_dir(&project.path)
        .args(["install", "--yes", "--dry-run"])
        .assert()
        .success();

    assert_eq!(before, project.snapshot());
}

#[test]
fn test_dry_run_never_blocks_on_conflicts() {
    let project = common::TestProject::new();
    project.write_file(".cursorrules", "existing");

    groundwork_cmd()
        .current_dir(&project.path)
        .args(["install", "--yes", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would write .cursorrules"));
}

#[test]
fn test_dry_run_leaves_legacy_context_untouched() {
    let project = common::TestProject::new();
    project.write_file("project-context.json", "{\"techStack\": \"rust\"}");
    let before = project.snapshot();

    groundwork_cmd()
        .current_dir(&project.path)
        .args(["install", "--yes", "--dry-run"])
        .assert()
        .success();

    assert_eq!(before, project.snapshot());
    assert!(project.file_exists("project-context.json"));
}

#[test]
fn test_dry_run_lists_the_full_plan() {
    let project = common::TestProject::new();

    groundwork_cmd()
        .current_dir(&project.path)
        .args(["install", "--yes", "--dry-run", "--platform", "codex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would write .groundwork/context.json"))
        .stdout(predicate::str::contains("Would write groundwork.json"))
        .stdout(predicate::str::contains("Would write AGENTS.md"))
        .stdout(predicate::str::contains("Would write .groundwork/PRINCIPLES.md"))
        .stdout(predicate::str::contains("Would write .groundwork/WORKFLOW.md"));
}

//! End-to-end tests for the `diffref` binary.
//!
//! Only pull request events are exercised here since they resolve from the
//! payload alone; push resolution is covered with a fake API in
//! `diffref-github`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PR_EVENT: &str = r#"{
    "action": "synchronize",
    "number": 15,
    "pull_request": {
        "number": 15,
        "base": { "ref": "main", "sha": "1111111111111111111111111111111111111111" },
        "head": { "ref": "feature/login", "sha": "2222222222222222222222222222222222222222" }
    },
    "repository": { "default_branch": "main" }
}"#;

fn diffref(dir: &TempDir) -> Command {
    let event = dir.path().join("event.json");
    fs::write(&event, PR_EVENT).unwrap();

    let mut cmd = Command::cargo_bin("diffref").unwrap();
    cmd.env_clear()
        .env("GITHUB_REPOSITORY", "octo/repo")
        .env("GITHUB_EVENT_NAME", "pull_request")
        .env("GITHUB_REF", "refs/pull/15/merge")
        .env("GITHUB_SHA", "3333333333333333333333333333333333333333")
        .env("GITHUB_EVENT_PATH", &event);
    cmd
}

#[test]
fn test_refs_text() {
    let dir = TempDir::new().unwrap();
    diffref(&dir)
        .arg("refs")
        .assert()
        .success()
        .stdout("refs/heads/main...refs/pull/15/merge\n");
}

#[test]
fn test_refs_json() {
    let dir = TempDir::new().unwrap();
    let output = diffref(&dir)
        .args(["refs", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["base"], "refs/heads/main");
    assert_eq!(value["head"], "refs/pull/15/merge");
}

#[test]
fn test_refs_github_output_file() {
    let dir = TempDir::new().unwrap();
    let output_file = dir.path().join("github_output");

    diffref(&dir)
        .env("GITHUB_OUTPUT", &output_file)
        .args(["refs", "--format", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base=refs/heads/main"));

    let written = fs::read_to_string(&output_file).unwrap();
    assert_eq!(written, "base=refs/heads/main\nhead=refs/pull/15/merge\n");
}

#[test]
fn test_git_diff_command() {
    let dir = TempDir::new().unwrap();
    diffref(&dir)
        .args(["git-diff", "--name-only", "--", "src", "my file.txt"])
        .assert()
        .success()
        .stdout("git diff 'refs/heads/main...refs/pull/15/merge' --name-only -- src 'my file.txt'\n");
}

#[test]
fn test_escape() {
    Command::cargo_bin("diffref")
        .unwrap()
        .args(["escape", "--", "plain", "with space", "it's", "'"])
        .assert()
        .success()
        .stdout("plain 'with space' 'it'\\''s' \\'\n");
}

#[test]
fn test_missing_repository_fails() {
    Command::cargo_bin("diffref")
        .unwrap()
        .env_clear()
        .arg("refs")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GITHUB_REPOSITORY"));
}

#[test]
fn test_invalid_repository_fails() {
    let dir = TempDir::new().unwrap();
    diffref(&dir)
        .args(["refs", "--repository", "not-a-slug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner/repo"));
}

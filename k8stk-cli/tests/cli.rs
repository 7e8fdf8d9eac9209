//! Integration tests for the k8stk CLI.
//!
//! These tests verify argument parsing, help text and version output.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("k8stk").expect("Failed to find k8stk binary");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("k8stk").expect("Failed to find k8stk binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("k8stk"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("k8stk").expect("Failed to find k8stk binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Merge and edit kubeconfig files"))
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("remove"));
}

#[test]
fn test_remove_help_lists_options() {
    let mut cmd = Command::cargo_bin("k8stk").expect("Failed to find k8stk binary");

    cmd.args(["remove", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--context"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--cascade"));
}

#[test]
fn test_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("k8stk").expect("Failed to find k8stk binary");

    cmd.arg("frobnicate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("k8stk").expect("Failed to find k8stk binary");

    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("k8stk"))
        .stderr(predicate::str::contains("Generating bash completion script"));
}

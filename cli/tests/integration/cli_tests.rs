//! Integration tests for teresa CLI argument parsing and startup errors.
//!
//! None of these reach a real docker or git: they stop at clap, at settings
//! resolution, or at the preflight checks with an empty `PATH`.

#![allow(clippy::expect_used, deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn teresa() -> Command {
    Command::cargo_bin("teresa").expect("teresa binary should exist")
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    teresa()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Manage the Teresa development container"));
}

#[test]
fn test_cli_help_lists_all_commands() {
    teresa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("stop"))
        .stdout(predicate::str::contains("restart"))
        .stdout(predicate::str::contains("cleanup"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    teresa()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "teresa ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_subcommand_help_describes_command() {
    teresa()
        .args(["cleanup", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete all install files"));
}

// --- Rejection tests ---

#[test]
fn test_unknown_subcommand_is_rejected() {
    teresa()
        .arg("launch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_commands_take_no_arguments() {
    teresa()
        .args(["start", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

// --- Startup errors ---

#[test]
fn test_invalid_setting_exits_one_before_running_anything() {
    teresa()
        .arg("stop")
        .env("TERESA_QUERY_TIMEOUT_SECS", "soon")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid TERESA_* environment variable"));
}

// --- Preflight ---

#[test]
fn test_quiet_start_still_reports_missing_docker() {
    let home = tempfile::tempdir().expect("tempdir");
    teresa()
        .args(["-q", "start"])
        .env("PATH", "")
        .env("HOME", home.path())
        .env("TERESA_INSTALL_DIR", home.path().join("teresa"))
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Docker daemon is not running"))
        .stderr(predicate::str::contains("WARN").not());
    assert!(!home.path().join("teresa").exists());
}

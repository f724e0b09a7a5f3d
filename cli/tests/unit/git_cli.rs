//! Unit tests for the `git` CLI adapter.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use teresa_cli::application::ports::VersionControl;
use teresa_cli::domain::EnvError;
use teresa_cli::infra::git::GitCli;

use crate::helpers::{RecordingRunner, err_output, ok_output};

const URL: &str = "https://example.com/teresa-docker.git";

#[tokio::test]
async fn clone_passes_url_and_destination() {
    let runner = RecordingRunner::default();
    let dest = PathBuf::from("/home/ada/.teresa");

    GitCli::new(&runner)
        .clone_repo(URL, &dest)
        .await
        .expect("clone");

    let call = runner.only_call();
    assert_eq!(call.program, "git");
    assert_eq!(call.args, vec!["clone", URL, "/home/ada/.teresa"]);
}

#[tokio::test]
async fn clone_failure_carries_stderr() {
    let runner = RecordingRunner::replying(vec![err_output(
        128,
        b"fatal: repository 'https://example.com/teresa-docker.git/' not found\n",
    )]);

    let err = GitCli::new(&runner)
        .clone_repo(URL, &PathBuf::from("/tmp/teresa"))
        .await
        .expect_err("clone fails");

    match err.downcast_ref::<EnvError>() {
        Some(EnvError::CloneFailed(detail)) => assert!(detail.contains("not found")),
        other => panic!("expected CloneFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn clone_spawn_failure_is_clone_failed() {
    let runner = RecordingRunner::failing_to_spawn();
    let err = GitCli::new(&runner)
        .clone_repo(URL, &PathBuf::from("/tmp/teresa"))
        .await
        .expect_err("spawn fails");
    assert!(matches!(
        err.downcast_ref::<EnvError>(),
        Some(EnvError::CloneFailed(_))
    ));
}

#[tokio::test]
async fn pull_runs_inside_install_dir() {
    let runner = RecordingRunner::replying(vec![ok_output(b"Already up to date.\n")]);
    let dir = PathBuf::from("/home/ada/.teresa");

    let stdout = GitCli::new(&runner).pull(&dir).await.expect("pull");

    assert_eq!(stdout, "Already up to date.\n");
    let call = runner.only_call();
    assert_eq!(call.cwd, Some(dir));
    assert_eq!(call.args, vec!["pull"]);
}

#[tokio::test]
async fn pull_failure_is_pull_failed() {
    let runner = RecordingRunner::replying(vec![err_output(
        1,
        b"error: Your local changes to the following files would be overwritten by merge",
    )]);

    let err = GitCli::new(&runner)
        .pull(&PathBuf::from("/home/ada/.teresa"))
        .await
        .expect_err("pull fails");

    assert!(matches!(
        err.downcast_ref::<EnvError>(),
        Some(EnvError::PullFailed { .. })
    ));
    assert!(err.to_string().contains("would be overwritten"));
}

#[test]
fn missing_executable_is_not_installed() {
    let git = GitCli::with_program(RecordingRunner::default(), "teresa-no-such-vcs-binary");
    assert!(!git.is_installed());
}

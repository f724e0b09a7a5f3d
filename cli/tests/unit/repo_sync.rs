//! Unit tests for cloning or pulling the companion repository.

#![allow(clippy::expect_used)]

use teresa_cli::application::services::repo_sync::{SyncOutcome, sync_repo};
use teresa_cli::domain::EnvError;
use teresa_cli::infra::fs::LocalFs;

use crate::helpers::{FakeVcs, RecordingReporter, VcsCall};

const URL: &str = "https://example.com/teresa-docker.git";

#[tokio::test]
async fn clones_once_when_dir_missing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("teresa");
    let vcs = FakeVcs::new();
    let reporter = RecordingReporter::new();

    let outcome = sync_repo(&vcs, &LocalFs, &reporter, URL, &dir)
        .await
        .expect("sync");

    assert_eq!(outcome, SyncOutcome::Cloned);
    assert_eq!(
        vcs.calls(),
        vec![VcsCall::Clone {
            url: URL.to_string(),
            dest: dir.clone(),
        }]
    );
    assert!(dir.is_dir());
    assert!(reporter.contains("Setting up environment in"));
    assert!(reporter.contains("Cloning Dockerfiles into"));
}

#[tokio::test]
async fn pulls_inside_existing_dir() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let vcs = FakeVcs::new();
    let reporter = RecordingReporter::new();

    let outcome = sync_repo(&vcs, &LocalFs, &reporter, URL, tmp.path())
        .await
        .expect("sync");

    assert_eq!(outcome, SyncOutcome::Pulled);
    assert_eq!(
        vcs.calls(),
        vec![VcsCall::Pull {
            dir: tmp.path().to_path_buf(),
        }]
    );
    assert!(reporter.contains("Found existing files at"));
    assert!(reporter.contains("output: Already up to date."));
}

#[tokio::test]
async fn clone_failure_is_fatal() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("teresa");
    let vcs = FakeVcs::failing_clone("could not resolve host: example.com");

    let err = sync_repo(&vcs, &LocalFs, &RecordingReporter::new(), URL, &dir)
        .await
        .expect_err("clone should fail");

    assert!(
        err.to_string()
            .starts_with("Failed to clone the repository:"),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains("could not resolve host"));
    assert_eq!(vcs.calls().len(), 1);
}

#[tokio::test]
async fn missing_git_stops_before_clone() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("teresa");
    let vcs = FakeVcs::missing();

    let err = sync_repo(&vcs, &LocalFs, &RecordingReporter::new(), URL, &dir)
        .await
        .expect_err("git is missing");

    assert!(matches!(
        err.downcast_ref::<EnvError>(),
        Some(EnvError::GitMissing)
    ));
    assert!(vcs.calls().is_empty());
}

#[tokio::test]
async fn pull_failure_propagates_without_clone() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let vcs = FakeVcs::failing_pull("CONFLICT (content): Merge conflict in Dockerfile");

    let err = sync_repo(&vcs, &LocalFs, &RecordingReporter::new(), URL, tmp.path())
        .await
        .expect_err("pull should fail");

    assert!(err.to_string().contains("Merge conflict"));
    assert!(
        vcs.calls()
            .iter()
            .all(|c| matches!(c, VcsCall::Pull { .. }))
    );
}

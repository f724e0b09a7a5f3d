//! Unit tests for container status and shell counting.

use teresa_cli::application::services::container::{
    container_running, count_interactive_shells,
};
use teresa_cli::domain::ContainerStatus;

use crate::helpers::{EngineCall, FakeEngine, RecordingReporter};

const NAME: &str = "teresa_dev_env";

// ── container_running ─────────────────────────────────────────────────────────

#[tokio::test]
async fn running_container_reports_true() {
    let engine = FakeEngine::new().with_statuses(vec![ContainerStatus::Running]);
    assert!(container_running(&engine, &RecordingReporter::new(), NAME).await);
}

#[tokio::test]
async fn absent_container_reports_false() {
    let engine = FakeEngine::new().with_statuses(vec![ContainerStatus::Absent]);
    assert!(!container_running(&engine, &RecordingReporter::new(), NAME).await);
}

#[tokio::test]
async fn exited_container_reports_false() {
    let engine =
        FakeEngine::new().with_statuses(vec![ContainerStatus::Other("exited".to_string())]);
    assert!(!container_running(&engine, &RecordingReporter::new(), NAME).await);
}

#[tokio::test]
async fn engine_error_reports_false_and_warns() {
    let engine = FakeEngine::new().with_status_error("Cannot connect to the Docker daemon");
    let reporter = RecordingReporter::new();

    assert!(!container_running(&engine, &reporter, NAME).await);
    assert!(reporter.contains("Error checking container status"));
}

// ── count_interactive_shells ──────────────────────────────────────────────────

#[tokio::test]
async fn not_running_counts_zero_without_listing() {
    let engine = FakeEngine::new()
        .with_statuses(vec![ContainerStatus::Other("created".to_string())])
        .with_processes(vec![vec!["/bin/bash"]]);

    assert_eq!(
        count_interactive_shells(&engine, &RecordingReporter::new(), NAME).await,
        0
    );
    assert!(!engine.called(&EngineCall::Processes(NAME.to_string())));
}

#[tokio::test]
async fn running_counts_shell_like_processes() {
    let engine = FakeEngine::new()
        .with_statuses(vec![ContainerStatus::Running])
        .with_processes(vec![vec![
            "/bin/bash",
            "sleep infinity",
            "bash -l",
            "/usr/bin/python3 app.py",
            "sh -c tail -f /dev/null",
        ]]);

    assert_eq!(
        count_interactive_shells(&engine, &RecordingReporter::new(), NAME).await,
        3
    );
}

#[tokio::test]
async fn listing_error_counts_zero_and_warns() {
    let engine = FakeEngine::new()
        .with_statuses(vec![ContainerStatus::Running])
        .with_processes_error("container is restarting");
    let reporter = RecordingReporter::new();

    assert_eq!(count_interactive_shells(&engine, &reporter, NAME).await, 0);
    assert!(reporter.contains("Error counting interactive shells"));
}

#[tokio::test]
async fn status_error_counts_zero() {
    let engine = FakeEngine::new().with_status_error("permission denied");
    assert_eq!(
        count_interactive_shells(&engine, &RecordingReporter::new(), NAME).await,
        0
    );
}

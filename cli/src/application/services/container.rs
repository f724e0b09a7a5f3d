//! Application service — live container status queries.
//!
//! Engine failures never escape these functions. They are reported and
//! mapped to the conservative answer (not running, zero shells).

use anyhow::Result;

use crate::application::ports::{ContainerEngine, ProgressReporter};
use crate::domain::{ContainerStatus, count_shells};

/// Whether the container called `name` is running.
pub async fn container_running(
    engine: &impl ContainerEngine,
    reporter: &impl ProgressReporter,
    name: &str,
) -> bool {
    match engine.container_status(name).await {
        Ok(status) => status.is_running(),
        Err(e) => {
            tracing::debug!(container = name, error = %format!("{e:#}"), "status query failed");
            reporter.warn(&format!("Error checking container status: {e:#}"));
            false
        }
    }
}

/// Count interactive shells inside `name`.
///
/// Returns 0 when the container is absent, not running, or cannot be queried.
pub async fn count_interactive_shells(
    engine: &impl ContainerEngine,
    reporter: &impl ProgressReporter,
    name: &str,
) -> usize {
    match shell_count(engine, name).await {
        Ok(count) => {
            tracing::debug!(container = name, shells = count, "counted interactive shells");
            count
        }
        Err(e) => {
            tracing::debug!(container = name, error = %format!("{e:#}"), "process listing failed");
            reporter.warn(&format!("Error counting interactive shells: {e:#}"));
            0
        }
    }
}

async fn shell_count(engine: &impl ContainerEngine, name: &str) -> Result<usize> {
    match engine.container_status(name).await? {
        ContainerStatus::Running => Ok(count_shells(&engine.processes(name).await?)),
        ContainerStatus::Absent | ContainerStatus::Other(_) => Ok(0),
    }
}

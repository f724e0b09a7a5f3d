//! Application service — preflight checks run before `teresa start`.
//!
//! Both checks are read-only and never return an error: a failed check is
//! reported and yields `false` so the caller can abort without side effects.

use crate::application::ports::{ContainerEngine, ProgressReporter, VersionControl};

/// Ping the container engine.
///
/// Fails closed: spawn errors, non-zero exits and timeouts all count as
/// unreachable.
pub async fn engine_reachable(engine: &impl ContainerEngine, reporter: &impl ProgressReporter) -> bool {
    match engine.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %format!("{e:#}"), "container engine ping failed");
            reporter.error(
                "Docker daemon is not running. Please check if docker is installed or start the Docker daemon.",
            );
            false
        }
    }
}

/// Check that the version-control client is on the search path.
pub fn vcs_client_present(vcs: &impl VersionControl, reporter: &impl ProgressReporter) -> bool {
    if vcs.is_installed() {
        return true;
    }
    reporter.error("Git is not installed. Please install Git and try again.");
    false
}

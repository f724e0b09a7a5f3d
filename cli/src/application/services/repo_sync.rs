//! Application service — keep the companion repository checkout current.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{LocalFs, ProgressReporter, VersionControl};
use crate::domain::EnvError;

/// What `sync_repo` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The directory was missing; it was created and cloned into.
    Cloned,
    /// The directory existed; latest changes were pulled.
    Pulled,
}

/// Clone the companion repository into `dir`, or pull if `dir` already exists.
///
/// Exactly one of clone or pull is attempted. No conflict resolution is
/// attempted on pull.
///
/// # Errors
///
/// Returns [`EnvError::GitMissing`] or [`EnvError::CloneFailed`] when the
/// initial clone cannot be made, and the pull error when updating fails.
pub async fn sync_repo(
    vcs: &impl VersionControl,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    repo_url: &str,
    dir: &Path,
) -> Result<SyncOutcome> {
    if fs.exists(dir) {
        reporter.step(&format!("Found existing files at {}", dir.display()));
        reporter.step("Pulling latest changes...");
        let stdout = vcs.pull(dir).await?;
        reporter.passthrough(&stdout);
        return Ok(SyncOutcome::Pulled);
    }

    reporter.step(&format!("Setting up environment in {}...", dir.display()));
    fs.create_dir_all(dir)?;

    if !vcs.is_installed() {
        return Err(EnvError::GitMissing.into());
    }

    reporter.begin(&format!("Cloning Dockerfiles into {}...", dir.display()));
    let cloned = vcs.clone_repo(repo_url, dir).await;
    reporter.end();
    match cloned {
        Ok(()) => Ok(SyncOutcome::Cloned),
        Err(e) => match e.downcast::<EnvError>() {
            Ok(env_err) => Err(env_err.into()),
            Err(other) => Err(EnvError::CloneFailed(format!("{other:#}")).into()),
        },
    }
}

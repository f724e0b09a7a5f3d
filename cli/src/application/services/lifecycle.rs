//! Application service — development environment lifecycle.
//!
//! Every operation is single-shot: subprocesses run one after another and a
//! failed step is never retried. A purge that fails half way leaves whatever
//! state the completed steps produced.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{
    ComposeDown, ContainerEngine, LocalFs, ProgressReporter, VersionControl,
};
use crate::application::services::container::count_interactive_shells;
use crate::application::services::preflight;
use crate::application::services::repo_sync::{SyncOutcome, sync_repo};
use crate::domain::Settings;
use crate::domain::container::{SESSION_SHELL, should_tear_down};

/// Everything a lifecycle operation needs, injected by the caller.
pub struct Environment<'a, E, V, F, R> {
    pub engine: &'a E,
    pub vcs: &'a V,
    pub fs: &'a F,
    pub reporter: &'a R,
    pub settings: &'a Settings,
    /// Companion checkout; also the compose project directory.
    pub install_dir: &'a Path,
}

/// Outcome of [`Environment::stop_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// No interactive shell was found; nothing ran.
    NoShells,
    /// `docker compose down` was issued.
    Stopped,
    /// Shells were found but the install directory holding the compose
    /// project is missing, so nothing could be brought down.
    NoComposeProject,
}

/// Outcome of [`Environment::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The engine or the version-control client is unavailable; nothing ran.
    PreflightFailed,
    /// An interactive session was attached and has exited.
    SessionEnded {
        /// `docker compose up` was issued before attaching.
        brought_up: bool,
        /// The environment was torn down after the session.
        torn_down: bool,
    },
}

impl<E, V, F, R> Environment<'_, E, V, F, R>
where
    E: ContainerEngine,
    V: VersionControl,
    F: LocalFs,
    R: ProgressReporter,
{
    /// Bring the compose project down if any interactive shell is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the compose command cannot be spawned.
    pub async fn stop_all(&self) -> Result<StopOutcome> {
        self.reporter.step("Stopping any container instances...");
        let shells =
            count_interactive_shells(self.engine, self.reporter, &self.settings.container_name)
                .await;
        if shells == 0 {
            return Ok(StopOutcome::NoShells);
        }
        if self.compose_down(ComposeDown::Containers).await? {
            Ok(StopOutcome::Stopped)
        } else {
            Ok(StopOutcome::NoComposeProject)
        }
    }

    /// Remove the container, its volumes and images, dangling images, and
    /// the install directory.
    ///
    /// Compose and prune exit codes are reported but not fatal, and a failed
    /// directory deletion is only reported.
    ///
    /// # Errors
    ///
    /// Returns an error if a compose command cannot be spawned.
    pub async fn purge(&self) -> Result<()> {
        self.stop_all().await?;

        self.reporter.step("Deleting the container and cache...");
        self.compose_down(ComposeDown::Everything).await?;

        self.reporter.step("Removing dangling images...");
        match self.engine.prune_dangling_images().await {
            Ok(report) => self.reporter.passthrough(&report),
            Err(e) => {
                tracing::debug!(error = %format!("{e:#}"), "image prune failed");
                self.reporter.warn(&format!("Failed to remove dangling images: {e:#}"));
            }
        }

        let dir = self.install_dir;
        if self.fs.exists(dir) {
            match self.fs.remove_dir_all(dir) {
                Ok(()) => self
                    .reporter
                    .success(&format!("Deleted all install files in {}", dir.display())),
                Err(e) => {
                    tracing::debug!(dir = %dir.display(), error = %format!("{e:#}"), "delete failed");
                    self.reporter.warn(&format!("Failed to delete install files: {e:#}"));
                }
            }
        }
        Ok(())
    }

    /// Sync the checkout, bring the environment up if nobody is using it,
    /// and attach an interactive shell.
    ///
    /// After the shell exits the environment is torn down when exactly one
    /// shell remains. See [`should_tear_down`] for why that is best effort.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be synced or a compose/exec
    /// command cannot be spawned.
    pub async fn start(&self) -> Result<StartOutcome> {
        if !(preflight::engine_reachable(self.engine, self.reporter).await
            && preflight::vcs_client_present(self.vcs, self.reporter))
        {
            return Ok(StartOutcome::PreflightFailed);
        }

        self.sync().await?;

        let name = self.settings.container_name.as_str();
        let brought_up = count_interactive_shells(self.engine, self.reporter, name).await == 0;
        if brought_up {
            self.reporter.step("Building and starting the development environment...");
            let status = self.engine.compose_up(self.install_dir).await?;
            if !status.success() {
                tracing::debug!(%status, "docker compose up failed");
                self.reporter.warn(&format!("docker compose up exited with {status}"));
            }
        }

        let session = self.engine.exec_interactive(name, SESSION_SHELL).await?;
        tracing::debug!(%session, container = name, "interactive session ended");

        let remaining = count_interactive_shells(self.engine, self.reporter, name).await;
        let torn_down = should_tear_down(remaining);
        if torn_down {
            self.compose_down(ComposeDown::Containers).await?;
        }

        Ok(StartOutcome::SessionEnded { brought_up, torn_down })
    }

    /// Purge everything, then fetch a fresh checkout. Does not start the
    /// container.
    ///
    /// # Errors
    ///
    /// Returns an error if the purge cannot run or the fresh clone fails.
    pub async fn restart(&self) -> Result<SyncOutcome> {
        self.purge().await?;
        self.sync().await
    }

    async fn sync(&self) -> Result<SyncOutcome> {
        sync_repo(
            self.vcs,
            self.fs,
            self.reporter,
            &self.settings.repo_url,
            self.install_dir,
        )
        .await
    }

    /// Returns `false` when the compose project directory is missing.
    async fn compose_down(&self, mode: ComposeDown) -> Result<bool> {
        let dir = self.install_dir;
        if !self.fs.exists(dir) {
            self.reporter.warn(&format!(
                "No compose project at {}; skipping docker compose down",
                dir.display()
            ));
            return Ok(false);
        }
        let status = self.engine.compose_down(dir, mode).await?;
        if !status.success() {
            tracing::debug!(%status, ?mode, "docker compose down failed");
            self.reporter.warn(&format!("docker compose down exited with {status}"));
        }
        Ok(true)
    }
}

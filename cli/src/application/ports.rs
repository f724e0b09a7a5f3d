//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::ContainerStatus;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output under the runner's query timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// timeout. On timeout, the child process must be killed (not left
    /// orphaned).
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program to completion and capture its output, without a timeout.
    async fn run_captured(
        &self,
        cwd: Option<&Path>,
        program: &str,
        args: &[&str],
    ) -> Result<Output>;
    /// Run a program with inherited stdio and return only its exit status.
    async fn run_status(
        &self,
        cwd: Option<&Path>,
        program: &str,
        args: &[&str],
    ) -> Result<ExitStatus>;
}

impl<T: CommandRunner> CommandRunner for &T {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        (**self).run(program, args).await
    }

    async fn run_captured(
        &self,
        cwd: Option<&Path>,
        program: &str,
        args: &[&str],
    ) -> Result<Output> {
        (**self).run_captured(cwd, program, args).await
    }

    async fn run_status(
        &self,
        cwd: Option<&Path>,
        program: &str,
        args: &[&str],
    ) -> Result<ExitStatus> {
        (**self).run_status(cwd, program, args).await
    }
}

// ── Container Engine Port ─────────────────────────────────────────────────────

/// Which `docker compose down` variant to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeDown {
    /// Stop and remove containers; keep volumes and images.
    Containers,
    /// Also remove named volumes and every image the compose file built.
    Everything,
}

/// Container engine operations used by the environment manager.
#[allow(async_fn_in_trait)]
pub trait ContainerEngine {
    /// Check that the engine daemon answers.
    async fn ping(&self) -> Result<()>;
    /// Look up the status of the container called `name`.
    async fn container_status(&self, name: &str) -> Result<ContainerStatus>;
    /// Command lines of every process running inside `name`.
    async fn processes(&self, name: &str) -> Result<Vec<String>>;
    /// Build and start the compose project in `project_dir`, detached.
    async fn compose_up(&self, project_dir: &Path) -> Result<ExitStatus>;
    /// Tear down the compose project in `project_dir`.
    async fn compose_down(&self, project_dir: &Path, mode: ComposeDown) -> Result<ExitStatus>;
    /// Attach an interactive `shell` inside `name` with inherited stdio.
    async fn exec_interactive(&self, name: &str, shell: &str) -> Result<ExitStatus>;
    /// Remove dangling images and return the engine's report.
    async fn prune_dangling_images(&self) -> Result<String>;
}

// ── Version Control Port ──────────────────────────────────────────────────────

/// Version-control client operations on the companion repository.
#[allow(async_fn_in_trait)]
pub trait VersionControl {
    /// Whether the client executable is on the search path.
    fn is_installed(&self) -> bool;
    /// Clone `url` into `dest`.
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
    /// Pull the latest changes inside `dir`, returning the client's stdout.
    async fn pull(&self, dir: &Path) -> Result<String>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the raw filesystem operations the services need.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    /// Create `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Recursively delete `path`.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit an error message. Never suppressed.
    fn error(&self, message: &str);
    /// Echo captured subprocess output verbatim.
    fn passthrough(&self, text: &str);
    /// Begin a long-running activity (spinner on a terminal).
    fn begin(&self, message: &str);
    /// End the activity started by [`ProgressReporter::begin`].
    fn end(&self);
}

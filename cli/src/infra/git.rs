//! `git` CLI implementation of the `VersionControl` port.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, VersionControl};
use crate::domain::EnvError;

/// Version-control client driven through the `git` executable.
pub struct GitCli<R> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> GitCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self::with_program(runner, "git")
    }

    /// Use a different executable name or path for the client.
    #[must_use]
    pub fn with_program(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }
}

impl<R: CommandRunner> VersionControl for GitCli<R> {
    fn is_installed(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let dest_str = dest
            .to_str()
            .context("install directory is not valid UTF-8")?;
        let output = self
            .runner
            .run_captured(None, &self.program, &["clone", url, dest_str])
            .await
            .map_err(|e| EnvError::CloneFailed(format!("{e:#}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(EnvError::CloneFailed(stderr).into());
        }
        Ok(())
    }

    async fn pull(&self, dir: &Path) -> Result<String> {
        let output = self
            .runner
            .run_captured(Some(dir), &self.program, &["pull"])
            .await
            .with_context(|| format!("running git pull in {}", dir.display()))?;
        if !output.status.success() {
            return Err(EnvError::PullFailed {
                dir: dir.display().to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

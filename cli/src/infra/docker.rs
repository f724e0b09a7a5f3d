//! `docker` CLI implementation of the `ContainerEngine` port.

use std::path::Path;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::application::ports::{CommandRunner, ComposeDown, ContainerEngine};
use crate::domain::{ContainerStatus, parse_top_commands};

const DOCKER: &str = "docker";

/// Container engine driven through the `docker` command-line client.
///
/// Uses the client's default daemon connection; no endpoint is configured.
pub struct DockerCli<R> {
    runner: R,
}

impl<R: CommandRunner> DockerCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// `docker inspect` reports a missing container on stderr with exit code 1.
fn is_not_found(stderr: &str) -> bool {
    let lower = stderr.to_ascii_lowercase();
    lower.contains("no such object") || lower.contains("no such container")
}

impl<R: CommandRunner> ContainerEngine for DockerCli<R> {
    async fn ping(&self) -> Result<()> {
        let output = self.runner.run(DOCKER, &["info"]).await?;
        anyhow::ensure!(
            output.status.success(),
            "docker info failed: {}",
            stderr_of(&output)
        );
        Ok(())
    }

    async fn container_status(&self, name: &str) -> Result<ContainerStatus> {
        let output = self
            .runner
            .run(DOCKER, &["inspect", "--format", "{{.State.Status}}", name])
            .await?;
        if output.status.success() {
            return Ok(ContainerStatus::parse(&String::from_utf8_lossy(&output.stdout)));
        }
        let stderr = stderr_of(&output);
        if is_not_found(&stderr) {
            return Ok(ContainerStatus::Absent);
        }
        anyhow::bail!("docker inspect {name} failed: {stderr}")
    }

    async fn processes(&self, name: &str) -> Result<Vec<String>> {
        let output = self
            .runner
            .run(DOCKER, &["top", name, "-eo", "pid,args"])
            .await?;
        anyhow::ensure!(
            output.status.success(),
            "docker top {name} failed: {}",
            stderr_of(&output)
        );
        Ok(parse_top_commands(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn compose_up(&self, project_dir: &Path) -> Result<ExitStatus> {
        self.runner
            .run_status(Some(project_dir), DOCKER, &["compose", "up", "-d", "--build"])
            .await
    }

    async fn compose_down(&self, project_dir: &Path, mode: ComposeDown) -> Result<ExitStatus> {
        let args: &[&str] = match mode {
            ComposeDown::Containers => &["compose", "down"],
            ComposeDown::Everything => &["compose", "down", "--volumes", "--rmi", "all"],
        };
        self.runner.run_status(Some(project_dir), DOCKER, args).await
    }

    async fn exec_interactive(&self, name: &str, shell: &str) -> Result<ExitStatus> {
        self.runner
            .run_status(None, DOCKER, &["exec", "-it", name, shell])
            .await
    }

    async fn prune_dangling_images(&self) -> Result<String> {
        let output = self
            .runner
            .run_captured(None, DOCKER, &["image", "prune", "-f"])
            .await?;
        anyhow::ensure!(
            output.status.success(),
            "docker image prune failed: {}",
            stderr_of(&output)
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

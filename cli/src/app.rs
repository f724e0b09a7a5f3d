//! Application context — unified state passed to every command handler.
//!
//! Built once in `Cli::run()` after argument parsing. Settings and the install
//! directory are resolved here so every command sees the same values.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ProgressReporter;
use crate::application::services::lifecycle::Environment;
use crate::domain::Settings;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::docker::DockerCli;
use crate::infra::fs::LocalFs;
use crate::infra::git::GitCli;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Process-wide settings, immutable after startup.
    pub settings: Settings,
    /// Companion checkout and compose project directory.
    pub install_dir: PathBuf,
    /// Container engine client.
    pub engine: DockerCli<TokioCommandRunner>,
    /// Version-control client.
    pub vcs: GitCli<TokioCommandRunner>,
    /// Local filesystem.
    pub fs: LocalFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a `TERESA_*` variable is invalid, the platform is
    /// unsupported, or the home directory cannot be determined.
    pub fn new(flags: &OutputFlags) -> Result<Self> {
        let settings = crate::infra::config::load_settings()?;
        let install_dir = crate::infra::config::install_dir(&settings)?;
        tracing::debug!(install_dir = %install_dir.display(), ?settings, "resolved settings");

        let timeout = settings.query_timeout();
        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            engine: DockerCli::new(TokioCommandRunner::new(timeout)),
            vcs: GitCli::new(TokioCommandRunner::new(timeout)),
            fs: LocalFs,
            settings,
            install_dir,
        })
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Lifecycle operations wired to the production clients.
    #[must_use]
    pub fn environment<'a, R: ProgressReporter>(
        &'a self,
        reporter: &'a R,
    ) -> Environment<'a, DockerCli<TokioCommandRunner>, GitCli<TokioCommandRunner>, LocalFs, R>
    {
        Environment {
            engine: &self.engine,
            vcs: &self.vcs,
            fs: &self.fs,
            reporter,
            settings: &self.settings,
            install_dir: &self.install_dir,
        }
    }
}

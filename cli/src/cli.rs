//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// Manage the Teresa development container
#[derive(Parser)]
#[command(
    name = "teresa",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the development environment
    Start,

    /// Stop the development environment if any shell is open
    Stop,

    /// Rebuild the dev container from scratch
    Restart,

    /// Delete all install files
    Cleanup,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be resolved or the command
    /// fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(&OutputFlags { no_color, quiet })?;
        match command {
            Command::Start => commands::start::run(&app).await,
            Command::Stop => commands::stop::run(&app).await,
            Command::Restart => commands::restart::run(&app).await,
            Command::Cleanup => commands::cleanup::run(&app).await,
        }
    }
}

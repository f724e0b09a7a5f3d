//! Container state and the interactive-shell occupancy heuristic.
//!
//! This module is intentionally free of I/O. The engine adapter hands over raw
//! CLI output; everything here is string in, value out.

/// Shell executable attached by `teresa start`.
pub const SESSION_SHELL: &str = "bash";

/// Live status of the managed container as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerStatus {
    Running,
    /// No container with the configured name exists.
    Absent,
    /// Any other engine state (`created`, `exited`, `paused`, ...).
    Other(String),
}

impl ContainerStatus {
    /// Parse the output of `docker inspect --format {{.State.Status}}`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "running" => Self::Running,
            "" => Self::Absent,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Extract command lines from `docker top <name> -eo pid,args` output.
///
/// The first line is the column header; each following row is a PID followed
/// by the full command line.
#[must_use]
pub fn parse_top_commands(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let command = line
                .split_once(char::is_whitespace)
                .map_or("", |(_pid, rest)| rest.trim());
            Some(command.to_string())
        })
        .collect()
}

/// Whether a process command line looks like an interactive shell.
///
/// Plain substring match, so `ssh-agent` or `/usr/bin/flash` also count.
#[must_use]
pub fn is_shell_command(command: &str) -> bool {
    command.contains("sh") || command.contains("bash")
}

/// Count shell-like processes in a container process listing.
#[must_use]
pub fn count_shells<S: AsRef<str>>(commands: &[S]) -> usize {
    commands
        .iter()
        .filter(|c| is_shell_command(c.as_ref()))
        .count()
}

/// Teardown rule applied after an attached session exits.
///
/// Exactly one remaining shell is taken to mean this was the only session.
/// Best effort: two concurrent `teresa start` runs can both observe a count of
/// one, or neither.
#[must_use]
pub fn should_tear_down(shells_after_exit: usize) -> bool {
    shells_after_exit == 1
}

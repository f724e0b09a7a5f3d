//! `teresa start` — sync the companion repository and attach a shell.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle::StartOutcome;

/// Run `teresa start`.
///
/// A failed preflight check is reported and ends the command without an
/// error.
///
/// # Errors
///
/// Returns an error if the repository cannot be synced or the container
/// commands cannot be spawned.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = app.terminal_reporter();
    let outcome = app.environment(&reporter).start().await?;

    if let StartOutcome::SessionEnded { torn_down, .. } = outcome {
        if torn_down {
            app.output.info("Last session closed. Development environment stopped.");
        } else {
            app.output
                .info("Other sessions are still open. Development environment left running.");
        }
    }
    Ok(())
}

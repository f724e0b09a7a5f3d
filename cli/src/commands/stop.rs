//! `teresa stop` — bring the environment down if anyone is using it.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle::StopOutcome;

/// Run `teresa stop`.
///
/// # Errors
///
/// Returns an error if `docker compose down` cannot be spawned.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = app.terminal_reporter();
    match app.environment(&reporter).stop_all().await? {
        StopOutcome::Stopped => app.output.success("Development environment stopped."),
        StopOutcome::NoShells => app.output.info("No running shells found. Nothing to stop."),
        StopOutcome::NoComposeProject => app.output.warn(
            "Shells are still open but no install files were found. Run `teresa cleanup` to remove the container.",
        ),
    }
    Ok(())
}

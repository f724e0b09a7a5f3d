//! `teresa restart` — purge everything and fetch a fresh checkout.

use anyhow::Result;

use crate::app::AppContext;

/// Run `teresa restart`.
///
/// The container is not started again; run `teresa start` afterwards.
///
/// # Errors
///
/// Returns an error if the purge cannot run or the fresh clone fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = app.terminal_reporter();
    app.environment(&reporter).restart().await?;
    app.output.success("Fresh environment files ready.");
    app.output.kv("Start", "teresa start");
    Ok(())
}

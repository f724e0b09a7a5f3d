//! `teresa cleanup` — remove the container, images, and install files.

use anyhow::Result;

use crate::app::AppContext;

/// Run `teresa cleanup`.
///
/// # Errors
///
/// Returns an error if a compose command cannot be spawned.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = app.terminal_reporter();
    app.environment(&reporter).purge().await
}

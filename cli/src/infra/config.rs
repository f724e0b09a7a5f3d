//! Settings loading from the process environment.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::{Platform, Settings, resolve_install_dir};

/// Load [`Settings`] from `TERESA_*` environment variables.
///
/// # Errors
///
/// Returns an error if a `TERESA_*` variable has an unparseable value.
pub fn load_settings() -> Result<Settings> {
    Settings::from_vars(std::env::vars()).context("invalid TERESA_* environment variable")
}

/// The install directory: `TERESA_INSTALL_DIR` when set, else the platform
/// default.
///
/// # Errors
///
/// Returns an error on an unsupported platform or when the home directory is
/// unknown.
pub fn install_dir(settings: &Settings) -> Result<PathBuf> {
    if let Some(dir) = &settings.install_dir {
        return Ok(dir.clone());
    }
    let base = crate::infra::fs::base_dirs()?;
    Ok(resolve_install_dir(&Platform::current(), &base)?)
}

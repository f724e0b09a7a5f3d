//! Filesystem infrastructure — implements the `LocalFs` port and base
//! directory lookup.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::{BaseDirs, EnvError};

/// Production filesystem implementation of `LocalFs`.
pub struct LocalFs;

impl crate::application::ports::LocalFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("creating directory {}", path.display()))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("removing directory {}", path.display()))
    }
}

/// Look up the current user's base directories.
///
/// # Errors
///
/// Returns [`EnvError::HomeDirUnavailable`] if the home directory cannot be
/// determined.
pub fn base_dirs() -> Result<BaseDirs, EnvError> {
    let home = dirs::home_dir().ok_or(EnvError::HomeDirUnavailable)?;
    Ok(BaseDirs {
        home,
        local_data: dirs::data_local_dir(),
    })
}

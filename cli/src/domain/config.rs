//! Process-wide settings.
//!
//! Loaded once at startup from `TERESA_*` environment variables and never
//! mutated afterwards.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "TERESA_";

/// Companion repository holding the Dockerfiles and compose file.
pub const DEFAULT_REPO_URL: &str = "https://github.com/Elegant-Mind-Club/teresa-docker.git";

/// Name of the container defined by the companion compose file.
pub const DEFAULT_CONTAINER_NAME: &str = "teresa_dev_env";

/// Settings for the environment manager.
///
/// Each field maps to `TERESA_<FIELD>`:
///   - `TERESA_REPO_URL`            (default: the teresa-docker repository)
///   - `TERESA_CONTAINER_NAME`      (default `teresa_dev_env`)
///   - `TERESA_INSTALL_DIR`         (optional, overrides the platform default)
///   - `TERESA_QUERY_TIMEOUT_SECS`  (default `30`)
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_repo_url")]
    pub repo_url: String,

    #[serde(default = "default_container_name")]
    pub container_name: String,

    pub install_dir: Option<PathBuf>,

    /// Timeout for captured engine queries (`info`, `inspect`, `top`).
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

fn default_repo_url() -> String {
    DEFAULT_REPO_URL.to_string()
}

fn default_container_name() -> String {
    DEFAULT_CONTAINER_NAME.to_string()
}

fn default_query_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_url: default_repo_url(),
            container_name: default_container_name(),
            install_dir: None,
            query_timeout_secs: default_query_timeout_secs(),
        }
    }
}

impl Settings {
    /// Build settings from `(name, value)` pairs, e.g. `std::env::vars()`.
    ///
    /// Only variables carrying [`ENV_PREFIX`] are considered.
    ///
    /// # Errors
    ///
    /// Returns an error if a recognised variable has an unparseable value.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }

    #[must_use]
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

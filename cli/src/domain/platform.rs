//! Host platform detection and install directory resolution.
//!
//! Pure functions only: base directories are looked up by the infra layer and
//! passed in, so every platform's rule can be exercised from any host.

use std::path::PathBuf;

use crate::domain::error::EnvError;

/// Directory name used for the companion checkout on every platform.
pub const INSTALL_DIR_NAME: &str = "teresa";

/// Host platform family, derived from the target OS identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    /// POSIX systems other than Linux and macOS (BSDs, illumos, ...).
    OtherUnix(String),
    Unsupported(String),
}

impl Platform {
    /// Classify a `std::env::consts::OS` identifier.
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            "freebsd" | "openbsd" | "netbsd" | "dragonfly" | "solaris" | "illumos"
            | "android" | "haiku" => Self::OtherUnix(os.to_string()),
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// The platform this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }
}

/// Per-user base directories the install path is derived from.
#[derive(Debug, Clone)]
pub struct BaseDirs {
    /// The user's home directory.
    pub home: PathBuf,
    /// `%LOCALAPPDATA%` on Windows; unused elsewhere.
    pub local_data: Option<PathBuf>,
}

/// Resolve the install directory for `platform`.
///
/// - Windows: `%LOCALAPPDATA%\teresa` (or `~\AppData\Local\teresa`)
/// - macOS: `~/Documents/teresa`
/// - Linux and other POSIX: `~/.teresa`
///
/// # Errors
///
/// Returns [`EnvError::UnsupportedPlatform`] for an unrecognised platform.
pub fn resolve_install_dir(platform: &Platform, dirs: &BaseDirs) -> Result<PathBuf, EnvError> {
    match platform {
        Platform::Windows => Ok(dirs
            .local_data
            .clone()
            .unwrap_or_else(|| dirs.home.join("AppData").join("Local"))
            .join(INSTALL_DIR_NAME)),
        Platform::MacOs => Ok(dirs.home.join("Documents").join(INSTALL_DIR_NAME)),
        Platform::Linux | Platform::OtherUnix(_) => {
            Ok(dirs.home.join(format!(".{INSTALL_DIR_NAME}")))
        }
        Platform::Unsupported(name) => Err(EnvError::UnsupportedPlatform(name.clone())),
    }
}

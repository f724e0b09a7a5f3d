//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

/// Errors raised while preparing the local development environment.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Unsupported platform.")]
    UnsupportedPlatform(String),

    #[error("cannot determine home directory")]
    HomeDirUnavailable,

    #[error("Git is not installed. Please install Git and try again.")]
    GitMissing,

    #[error("Failed to clone the repository: {0}")]
    CloneFailed(String),

    #[error("Failed to pull latest changes in {dir}: {detail}")]
    PullFailed { dir: String, detail: String },
}

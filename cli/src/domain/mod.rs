//! Domain layer — pure types, rules, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod container;
pub mod error;
pub mod platform;

pub use config::Settings;
pub use container::{ContainerStatus, count_shells, parse_top_commands, should_tear_down};
pub use error::EnvError;
pub use platform::{BaseDirs, Platform, resolve_install_dir};

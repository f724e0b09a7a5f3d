//! Unit tests for teresa CLI
//!
//! These tests use fake ports and run fast without spawning docker or git.

mod container_status;
mod git_cli;
mod repo_sync;

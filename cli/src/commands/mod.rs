//! Command implementations

pub mod cleanup;
pub mod restart;
pub mod start;
pub mod stop;

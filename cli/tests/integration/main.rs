//! Integration tests for the teresa binary.

mod cli_tests;

//! Common utilities for the Cassia crates.
//!
//! This crate provides shared infrastructure used by the builder and the CLI:
//! - **Warning System** - colored terminal output for suspicious but accepted input

pub mod warning;

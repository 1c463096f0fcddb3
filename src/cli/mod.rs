// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for driving game sessions.
//!
//! This module contains the command-line interface logic, including
//! argument parsing and the `run` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Logging macros and verbosity control.
pub mod logging;

/// Session run loop.
pub mod run;

//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the channel analysis.
/// Fetches durations for a channel and prints the storage report.
pub mod analyze;

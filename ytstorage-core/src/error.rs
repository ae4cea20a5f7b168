// ============================================================================
// ytstorage-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Core Library
//
// This module defines the single error enum used throughout ytstorage-core
// together with the `CoreResult` alias and small constructor helpers for the
// command-related variants.
//
// KEY COMPONENTS:
// - CoreError: every failure the pipeline can produce
// - CoreResult: result alias used by all public functions
// - Helper constructors for command failures
//
// AI-ASSISTANT-INFO: Core error types and result alias

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Custom error types for ytstorage-core
#[derive(Error, Debug)]
pub enum CoreError {
    /// The downloader ran but exited unsuccessfully.
    #[error("Failed to fetch durations: '{tool}' exited with {}: {stderr}", describe_code(.code))]
    Fetch {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The downloader could not be launched at all.
    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    /// A single duration string was malformed.
    #[error("Invalid duration '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// A duration in the downloader output was malformed.
    #[error("Line {line} of downloader output: {source}")]
    ParseLine {
        line: usize,
        #[source]
        source: Box<CoreError>,
    },

    #[error("Total duration overflowed while summing {0} videos")]
    Overflow(usize),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for ytstorage-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

// ============================================================================
// CONSTRUCTOR HELPERS
// ============================================================================

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Builds a [`CoreError::Fetch`] from a finished command.
pub fn command_failed_error(tool: &str, code: Option<i32>, stderr: impl Into<String>) -> CoreError {
    CoreError::Fetch {
        tool: tool.to_string(),
        code,
        stderr: stderr.into().trim().to_string(),
    }
}

/// Builds a [`CoreError::CommandStart`] for a command that never ran.
pub fn command_start_error(tool: &str, err: io::Error) -> CoreError {
    CoreError::CommandStart(tool.to_string(), err)
}

/// Builds a [`CoreError::Parse`] for the given duration text.
pub fn parse_error(input: &str, reason: impl Into<String>) -> CoreError {
    CoreError::Parse {
        input: input.to_string(),
        reason: reason.into(),
    }
}

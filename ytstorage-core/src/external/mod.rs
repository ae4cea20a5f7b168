// ============================================================================
// ytstorage-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the Downloader CLI
//
// This module encapsulates the only external dependency of the estimator:
// running a command-line downloader and capturing what it prints. A trait
// sits between the pipeline and `std::process` so tests can substitute a
// mock runner instead of requiring a real downloader binary.
//
// KEY COMPONENTS:
// - CommandRunner: trait for executing a program and capturing its output
// - CommandOutput: exit code plus captured stdout/stderr
// - SystemCommandRunner: production implementation using std::process
// - fetch_durations: the flat-playlist duration listing
//
// AI-ASSISTANT-INFO: External process abstraction and downloader invocation

// ---- Internal crate imports ----
use crate::error::{CoreResult, command_start_error};

// ---- Standard library imports ----
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the downloader-specific duration listing
pub mod ytdlp_executor;

/// Mock command runner for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ytdlp_executor::{fetch_durations, split_duration_lines};

// ============================================================================
// COMMAND EXECUTION ABSTRACTION
// ============================================================================

/// Captured result of a finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait representing something that can run a program to completion.
///
/// # Examples
///
/// ```rust
/// use ytstorage_core::CoreResult;
/// use ytstorage_core::external::{CommandOutput, CommandRunner};
///
/// struct FixedRunner;
///
/// impl CommandRunner for FixedRunner {
///     fn run(&self, _program: &str, _args: &[String]) -> CoreResult<CommandOutput> {
///         Ok(CommandOutput {
///             code: Some(0),
///             stdout: "10:00\n5:00\n".to_string(),
///             stderr: String::new(),
///         })
///     }
/// }
///
/// let output = FixedRunner.run("yt-dlp", &[]).unwrap();
/// assert!(output.success());
/// ```
pub trait CommandRunner {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// A non-zero exit is not an error at this level; only failure to launch is.
    fn run(&self, program: &str, args: &[String]) -> CoreResult<CommandOutput>;
}

/// Concrete implementation of `CommandRunner` using `std::process::Command`.
///
/// No timeout is applied; an unresponsive program blocks the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> CoreResult<CommandOutput> {
        log::debug!("Running command: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                log::debug!("Failed to start '{}': {}", program, e);
                command_start_error(program, e)
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

// ============================================================================
// ytstorage-cli/src/commands/analyze.rs
// ============================================================================
//
// ANALYZE COMMAND: Channel Storage Report
//
// Builds the core configuration from the parsed arguments, runs the analysis
// pipeline and writes the finished report. Nothing is written to the output
// unless the whole analysis succeeds.
//
// AI-ASSISTANT-INFO: Implementation of the channel analysis command

use std::io::Write;

use ytstorage_core::{CommandRunner, CoreConfig, CoreResult, analyze_channel};

use crate::cli::Cli;

/// Runs the analysis for `args.channel_url` and writes the report to `out`.
pub fn run_analyze<R, W>(args: &Cli, runner: &R, out: &mut W) -> CoreResult<()>
where
    R: CommandRunner + ?Sized,
    W: Write + ?Sized,
{
    let config = CoreConfig::new(args.downloader.as_str());
    log::debug!("Configuration: {:?}", config);

    let report = analyze_channel(runner, &config, &args.channel_url)?;

    write!(out, "{}", report)?;
    out.flush()?;
    Ok(())
}

//! Flat-playlist duration listing through the downloader.
//!
//! The downloader is asked for `--get-duration --flat-playlist <url>` and
//! prints one duration per video on stdout. URL validation is left to it.

use super::CommandRunner;
use crate::config::CoreConfig;
use crate::error::{CoreResult, command_failed_error};

/// Runs the downloader for `channel_url` and returns its duration lines in order.
///
/// A non-zero exit becomes [`crate::CoreError::Fetch`] carrying the tool's
/// stderr. There is no retry.
pub fn fetch_durations<R: CommandRunner + ?Sized>(
    runner: &R,
    config: &CoreConfig,
    channel_url: &str,
) -> CoreResult<Vec<String>> {
    let args = config.listing_args(channel_url);
    let output = runner.run(&config.downloader, &args)?;

    if !output.success() {
        log::debug!(
            "{} failed for {} (code {:?}): {}",
            config.downloader,
            channel_url,
            output.code,
            output.stderr.trim()
        );
        return Err(command_failed_error(
            &config.downloader,
            output.code,
            output.stderr,
        ));
    }

    let durations = split_duration_lines(&output.stdout);
    log::info!("Fetched {} durations for {}", durations.len(), channel_url);
    Ok(durations)
}

/// Splits downloader stdout into one entry per line.
///
/// Whitespace around the whole output is trimmed first, so the trailing
/// newline does not produce an empty entry and empty output yields no entries.
/// Blank lines in the middle are kept and will fail to parse.
#[must_use]
pub fn split_duration_lines(stdout: &str) -> Vec<String> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.lines().map(str::to_string).collect()
}

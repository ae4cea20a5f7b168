//! Channel analysis pipeline: fetch, parse, sum, estimate.

use crate::config::CoreConfig;
use crate::duration::total_seconds;
use crate::error::CoreResult;
use crate::external::{CommandRunner, fetch_durations};
use crate::report::ChannelReport;

/// Produces the storage report for `channel_url`.
///
/// Any fetch failure or malformed duration aborts the whole analysis; no
/// partial report is returned.
pub fn analyze_channel<R: CommandRunner + ?Sized>(
    runner: &R,
    config: &CoreConfig,
    channel_url: &str,
) -> CoreResult<ChannelReport> {
    config.validate()?;

    log::info!("Analyzing channel: {}", channel_url);
    let durations = fetch_durations(runner, config, channel_url)?;

    let total = total_seconds(&durations).inspect_err(|e| {
        log::debug!("Could not parse durations for {}: {}", channel_url, e);
    })?;
    log::debug!("{} videos, {} seconds in total", durations.len(), total);

    Ok(ChannelReport::new(channel_url, durations.len(), total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::external::mocks::MockCommandRunner;

    #[test]
    fn test_analyze_channel_end_to_end() {
        let runner = MockCommandRunner::new();
        runner.add_success("10:00\n5:00\n");

        let report =
            analyze_channel(&runner, &CoreConfig::default(), "https://youtube.com/@SomeChannel")
                .unwrap();
        assert_eq!(report.channel_label, "@SomeChannel");
        assert_eq!(report.video_count, 2);
        assert_eq!(report.total_seconds, 900);
        assert_eq!(report.estimates.len(), 4);
        assert!((report.estimates[0].gigabytes - 900.0 * 128.0 * 1000.0 / (8.0 * 1024f64.powi(3))).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_channel_rejects_invalid_config() {
        let runner = MockCommandRunner::new();
        let err = analyze_channel(&runner, &CoreConfig::new(""), "https://youtube.com/@x").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(runner.get_received_calls().is_empty());
    }

    #[test]
    fn test_analyze_channel_malformed_duration() {
        let runner = MockCommandRunner::new();
        runner.add_success("10:00\nNA\n");

        let err = analyze_channel(&runner, &CoreConfig::default(), "https://youtube.com/@x").unwrap_err();
        assert!(matches!(err, CoreError::ParseLine { line: 2, .. }));
    }
}

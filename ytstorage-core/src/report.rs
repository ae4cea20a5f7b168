// ============================================================================
// ytstorage-core/src/report.rs
// ============================================================================
//
// REPORTING: Channel Storage Report
//
// This module holds the computed report for one channel and renders it in
// the fixed text layout printed by the CLI.
//
// Layout:
//
//   Channel Analysis: @SomeChannel
//   Total Videos:     2
//   Total Duration:   0 hours 15 minutes
//
//   Storage Estimates:
//   MP3 (128 kbps):   0.01 GB
//   ...
//   MP4 (4K):         2.62 GB (25 Mbps average)
//
// AI-ASSISTANT-INFO: Report model, channel label extraction and rendering

use crate::duration::format_hours_minutes;
use crate::estimate::{StorageEstimate, default_estimates};
use std::fmt;

/// Column at which report values start.
const LABEL_WIDTH: usize = 18;

/// Everything printed for one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelReport {
    pub channel_label: String,
    pub video_count: usize,
    pub total_seconds: u64,
    pub estimates: Vec<StorageEstimate>,
}

impl ChannelReport {
    /// Builds the report for `channel_url` with estimates for the default presets.
    #[must_use]
    pub fn new(channel_url: &str, video_count: usize, total_seconds: u64) -> Self {
        Self {
            channel_label: channel_label(channel_url).to_string(),
            video_count,
            total_seconds,
            estimates: default_estimates(total_seconds),
        }
    }
}

/// Returns the URL from the first `@` to the end, or `""` without one.
///
/// Query strings and later `@` characters are kept as-is.
#[must_use]
pub fn channel_label(channel_url: &str) -> &str {
    channel_url
        .find('@')
        .map_or("", |start| &channel_url[start..])
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{:<width$}{}", format!("{label}:"), value, width = LABEL_WIDTH)
}

impl fmt::Display for ChannelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Channel Analysis: {}", self.channel_label)?;
        write_row(f, "Total Videos", self.video_count)?;
        write_row(f, "Total Duration", format_hours_minutes(self.total_seconds))?;
        writeln!(f)?;
        writeln!(f, "Storage Estimates:")?;
        for estimate in &self.estimates {
            let size = format!("{:.2} GB", estimate.gigabytes);
            match estimate.preset.note {
                Some(note) => write_row(f, &estimate.preset.title(), format_args!("{size} ({note})"))?,
                None => write_row(f, &estimate.preset.title(), size)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_label() {
        assert_eq!(channel_label("https://youtube.com/@SomeChannel"), "@SomeChannel");
        assert_eq!(channel_label("https://www.youtube.com/@SomeChannel/videos"), "@SomeChannel/videos");
        assert_eq!(channel_label("https://youtube.com/channel/UC123"), "");
        assert_eq!(channel_label(""), "");
        assert_eq!(channel_label("@"), "@");
    }

    #[test]
    fn test_channel_label_keeps_everything_after_first_at() {
        assert_eq!(
            channel_label("https://youtube.com/@chan?si=a@b"),
            "@chan?si=a@b"
        );
        assert_eq!(channel_label("user@host/@chan"), "@host/@chan");
    }

    #[test]
    fn test_report_layout() {
        let report = ChannelReport::new("https://youtube.com/@SomeChannel", 2, 900);
        let expected = "\
Channel Analysis: @SomeChannel
Total Videos:     2
Total Duration:   0 hours 15 minutes

Storage Estimates:
MP3 (128 kbps):   0.01 GB
MP3 (320 kbps):   0.03 GB
MP4 (1080p):      0.52 GB (5 Mbps average)
MP4 (4K):         2.62 GB (25 Mbps average)
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_report_large_channel() {
        // 1000 hours of video
        let report = ChannelReport::new("https://youtube.com/@Big", 4321, 3_600_000);
        let text = report.to_string();
        assert!(text.contains("Total Videos:     4321\n"));
        assert!(text.contains("Total Duration:   1000 hours 0 minutes\n"));
        assert!(text.contains("MP3 (128 kbps):   53.64 GB\n"));
        assert!(text.contains("MP4 (4K):         10477.48 GB (25 Mbps average)\n"));
    }

    #[test]
    fn test_report_without_label() {
        let report = ChannelReport::new("https://youtube.com/channel/UC123", 0, 0);
        assert!(report.to_string().starts_with("Channel Analysis: \nTotal Videos:     0\n"));
        assert!(report.estimates.iter().all(|e| e.gigabytes == 0.0));
    }
}

//! Configuration structures and constants for the ytstorage-core library.
//!
//! The only moving part is which downloader binary is invoked and with which
//! listing flags; the bitrate presets live in [`crate::estimate`].

use crate::error::{CoreError, CoreResult};

// Default constants

/// Downloader invoked when nothing else is configured.
pub const DEFAULT_DOWNLOADER: &str = "yt-dlp";

/// Flags asking the downloader for one duration per flat-playlist entry.
pub const DURATION_LISTING_ARGS: [&str; 2] = ["--get-duration", "--flat-playlist"];

/// Main configuration structure for the ytstorage-core library.
///
/// Created by the consumer (e.g. ytstorage-cli) and passed to
/// [`crate::analyze_channel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Program name or path of the downloader.
    pub downloader: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            downloader: DEFAULT_DOWNLOADER.to_string(),
        }
    }
}

impl CoreConfig {
    pub fn new(downloader: impl Into<String>) -> Self {
        Self {
            downloader: downloader.into(),
        }
    }

    /// Arguments passed to the downloader for `channel_url`.
    #[must_use]
    pub fn listing_args(&self, channel_url: &str) -> Vec<String> {
        DURATION_LISTING_ARGS
            .iter()
            .map(|arg| (*arg).to_string())
            .chain(std::iter::once(channel_url.to_string()))
            .collect()
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.downloader.trim().is_empty() {
            return Err(CoreError::Config(
                "downloader program must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoreConfig::default();
        assert_eq!(config.downloader, "yt-dlp");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_listing_args() {
        let config = CoreConfig::default();
        assert_eq!(
            config.listing_args("https://youtube.com/@SomeChannel"),
            vec!["--get-duration", "--flat-playlist", "https://youtube.com/@SomeChannel"]
        );
    }

    #[test]
    fn test_validate_rejects_blank_downloader() {
        assert!(matches!(CoreConfig::new("  ").validate(), Err(CoreError::Config(_))));
        assert!(CoreConfig::new("/opt/bin/yt-dlp").validate().is_ok());
    }
}

// ytstorage-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use ytstorage_core::config::DEFAULT_DOWNLOADER;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "ytstorage: YouTube channel archive storage estimator",
    long_about = "Lists every video duration on a channel via yt-dlp and estimates \
                  how much storage an MP3 or MP4 archive of the channel would need."
)]
pub struct Cli {
    /// Channel URL, e.g. https://www.youtube.com/@SomeChannel
    #[arg(required = true, value_name = "CHANNEL_URL")]
    pub channel_url: String,

    /// Downloader program used to list durations.
    /// Can also be set via the YTSTORAGE_DOWNLOADER environment variable.
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "YTSTORAGE_DOWNLOADER",
        default_value = DEFAULT_DOWNLOADER
    )]
    pub downloader: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_single_url() {
        let cli = Cli::try_parse_from(["ytstorage", "https://youtube.com/@SomeChannel"]).unwrap();
        assert_eq!(cli.channel_url, "https://youtube.com/@SomeChannel");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "ytstorage",
            "-v",
            "--downloader",
            "/opt/yt-dlp",
            "https://youtube.com/@x",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.downloader, "/opt/yt-dlp");
    }

    #[test]
    fn test_rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["ytstorage"]).is_err());
        assert!(Cli::try_parse_from(["ytstorage", "https://a/@x", "https://b/@y"]).is_err());
    }
}

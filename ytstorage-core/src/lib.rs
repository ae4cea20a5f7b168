//! Core library for estimating how much storage a YouTube channel archive needs.
//!
//! This crate asks an external downloader (`yt-dlp` by default) for the
//! duration of every video on a channel, sums them, and projects the size of
//! the archive at a few fixed MP3 and MP4 bitrates.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use ytstorage_core::{CoreConfig, SystemCommandRunner, analyze_channel};
//!
//! let config = CoreConfig::default();
//! config.validate().unwrap();
//!
//! let report = analyze_channel(
//!     &SystemCommandRunner,
//!     &config,
//!     "https://www.youtube.com/@SomeChannel",
//! ).unwrap();
//!
//! print!("{}", report);
//! ```

pub mod analysis;
pub mod config;
pub mod duration;
pub mod error;
pub mod estimate;
pub mod external;
pub mod report;

// Re-exports for public API
pub use analysis::analyze_channel;
pub use config::CoreConfig;
pub use duration::{format_hours_minutes, parse_duration, total_seconds};
pub use error::{CoreError, CoreResult};
pub use estimate::{BitratePreset, Container, DEFAULT_PRESETS, StorageEstimate, estimate_gb};
pub use external::{CommandOutput, CommandRunner, SystemCommandRunner, fetch_durations};
pub use report::{ChannelReport, channel_label};

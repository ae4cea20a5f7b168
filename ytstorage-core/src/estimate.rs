// ============================================================================
// ytstorage-core/src/estimate.rs
// ============================================================================
//
// STORAGE ESTIMATION: Bitrate Presets and Size Projection
//
// This module converts a total playback time into projected on-disk size for
// a fixed set of encoding presets.
//
// KEY COMPONENTS:
// - estimate_gb: pure size projection for one bitrate
// - BitratePreset / Container: the encodings the report covers
// - DEFAULT_PRESETS: MP3 128/320 kbps and MP4 5/25 Mbps
//
// AI-ASSISTANT-INFO: Storage size projection from duration and bitrate

use std::fmt;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Bits in one decimal kilobit.
const BITS_PER_KILOBIT: f64 = 1000.0;

/// Bytes in one binary gigabyte (1024³).
const BYTES_PER_GIGABYTE: f64 = 1024.0 * 1024.0 * 1024.0;

/// Presets printed in every report, in display order.
pub const DEFAULT_PRESETS: [BitratePreset; 4] = [
    BitratePreset::new(Container::Mp3, "128 kbps", 128, None),
    BitratePreset::new(Container::Mp3, "320 kbps", 320, None),
    BitratePreset::new(Container::Mp4, "1080p", 5000, Some("5 Mbps average")),
    BitratePreset::new(Container::Mp4, "4K", 25000, Some("25 Mbps average")),
];

// ============================================================================
// TYPES
// ============================================================================

/// Output container a preset targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Mp3,
    Mp4,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Mp3 => write!(f, "MP3"),
            Container::Mp4 => write!(f, "MP4"),
        }
    }
}

/// A fixed encoding used to project storage size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitratePreset {
    pub container: Container,
    /// Short label shown in parentheses, e.g. `128 kbps` or `1080p`.
    pub label: &'static str,
    pub bitrate_kbps: u32,
    /// Trailing annotation printed after the size, if any.
    pub note: Option<&'static str>,
}

impl BitratePreset {
    pub const fn new(
        container: Container,
        label: &'static str,
        bitrate_kbps: u32,
        note: Option<&'static str>,
    ) -> Self {
        Self {
            container,
            label,
            bitrate_kbps,
            note,
        }
    }

    /// Report row title, e.g. `MP3 (128 kbps)`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} ({})", self.container, self.label)
    }

    /// Projected size in gigabytes for `total_seconds` of media.
    #[must_use]
    pub fn estimate(&self, total_seconds: u64) -> StorageEstimate {
        StorageEstimate {
            preset: *self,
            gigabytes: estimate_gb(total_seconds, self.bitrate_kbps),
        }
    }
}

/// One preset paired with its projected size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageEstimate {
    pub preset: BitratePreset,
    pub gigabytes: f64,
}

// ============================================================================
// ESTIMATION
// ============================================================================

/// Projects storage in binary gigabytes: `seconds * kbps * 1000 / (8 * 1024³)`.
#[must_use]
pub fn estimate_gb(total_seconds: u64, bitrate_kbps: u32) -> f64 {
    let bits = total_seconds as f64 * f64::from(bitrate_kbps) * BITS_PER_KILOBIT;
    bits / (8.0 * BYTES_PER_GIGABYTE)
}

/// Estimates for every entry of [`DEFAULT_PRESETS`], in order.
#[must_use]
pub fn default_estimates(total_seconds: u64) -> Vec<StorageEstimate> {
    DEFAULT_PRESETS
        .iter()
        .map(|preset| preset.estimate(total_seconds))
        .collect()
}

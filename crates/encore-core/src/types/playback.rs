//! Playback parameter types shared across the application.

use serde::{Deserialize, Serialize};

/// Volume level as an integer percentage (0 to 100), the scale the embed's
/// `setVolume` call expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(u8);

impl Volume {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);
    pub const DEFAULT: Self = Self(50);

    pub const fn new(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    pub const fn as_percent(&self) -> u8 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Playback speed multiplier, clamped to the range the embed supports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    pub const MIN: Self = Self(0.25);
    pub const MAX: Self = Self(2.0);
    pub const DEFAULT: Self = Self(1.0);
    /// Granularity of the rate slider.
    pub const STEP: f64 = 0.01;

    pub fn new(rate: f64) -> Self {
        Self(rate.clamp(0.25, 2.0))
    }

    pub const fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Format a second count as MM:SS or H:MM:SS for position readouts.
pub fn format_seconds(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_clamping() {
        assert_eq!(Volume::new(150).as_percent(), 100);
        assert_eq!(Volume::new(0).as_percent(), 0);
        assert_eq!(Volume::new(50).as_percent(), 50);
        assert_eq!(Volume::default(), Volume::DEFAULT);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_rate_clamping() {
        assert_eq!(PlaybackRate::new(3.0).as_f64(), 2.0);
        assert_eq!(PlaybackRate::new(0.1).as_f64(), 0.25);
        assert_eq!(PlaybackRate::new(1.5).as_f64(), 1.5);
        assert_eq!(PlaybackRate::default().as_f64(), 1.0);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(65.0), "1:05");
        assert_eq!(format_seconds(3661.0), "1:01:01");
        assert_eq!(format_seconds(0.0), "0:00");
        assert_eq!(format_seconds(59.9), "0:59");
        assert_eq!(format_seconds(f64::NAN), "0:00");
    }
}

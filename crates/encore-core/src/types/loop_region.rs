//! The A-B loop window.

use serde::{Deserialize, Serialize};

use crate::types::playback::PlaybackRate;

/// User-adjustable loop window over the current video.
///
/// Invariant: `start <= end <= duration`. The two bounds come from
/// independent sliders, so the invariant can be violated for a moment between
/// updates; the worst outcome is one harmless seek, so nothing enforces it
/// atomically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LoopRegion {
    /// Loop start in seconds from the beginning of the video.
    pub start: f64,
    /// Loop end in seconds; playback past the threshold rewinds to `start`.
    pub end: f64,
    /// Whether the loop monitor acts on this region at all.
    pub enabled: bool,
}

impl LoopRegion {
    /// End bound used before the real video duration is known.
    pub const INITIAL_END: f64 = 10.0;

    pub const fn new(start: f64, end: f64, enabled: bool) -> Self {
        Self {
            start,
            end,
            enabled,
        }
    }

    /// Whether a poll tick observing `current` seconds should rewind.
    ///
    /// The threshold divides the raw `end` timestamp by the playback rate, so
    /// at rates other than 1.0 the audible loop point drifts away from `end`.
    /// That is the behavior the player has always had and downstream tests
    /// pin it; rate compensation is deliberately not attempted here.
    pub fn wrap_due(&self, current: f64, rate: PlaybackRate) -> bool {
        self.enabled && current >= self.end / rate.as_f64()
    }
}

impl Default for LoopRegion {
    fn default() -> Self {
        Self::new(0.0, Self::INITIAL_END, true)
    }
}

//! Player state management.

use dioxus::prelude::*;

use encore_core::{LoopRegion, PlaybackRate, Volume};

/// Duration shown before the embed has reported the real one.
pub const FALLBACK_DURATION: f64 = 600.0;

/// Whether the embed has signalled readiness.
///
/// Controls render disabled while `NotReady`; any call that slips through
/// anyway gets a not-ready error and is treated as a no-op.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Readiness {
    #[default]
    NotReady,
    Ready,
}

/// Playback status as reported by the embed.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum PlaybackStatus {
    #[default]
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlaybackStatus {
    /// Map the embed's numeric player-state codes.
    pub const fn from_embed_code(code: i64) -> Self {
        match code {
            0 => Self::Ended,
            1 => Self::Playing,
            2 => Self::Paused,
            3 => Self::Buffering,
            5 => Self::Cued,
            _ => Self::Unstarted,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unstarted => "idle",
            Self::Ended => "ended",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Buffering => "buffering",
            Self::Cued => "cued",
        }
    }
}

/// Player state for the UI.
#[derive(Clone)]
pub struct PlayerState {
    /// Embed readiness.
    pub readiness: Signal<Readiness>,
    /// Playback status as last reported by the embed.
    pub status: Signal<PlaybackStatus>,
    /// Current position in seconds.
    pub position: Signal<f64>,
    /// Total duration in seconds.
    pub duration: Signal<f64>,
    /// Loop start in seconds.
    pub loop_start: Signal<f64>,
    /// Loop end in seconds.
    pub loop_end: Signal<f64>,
    /// Whether A-B looping is armed.
    pub looping: Signal<bool>,
    /// Output volume.
    pub volume: Signal<Volume>,
    /// Playback speed multiplier.
    pub rate: Signal<PlaybackRate>,
    /// Free-text URL field contents.
    pub url: Signal<String>,
}

impl PlayerState {
    /// Create a new player state.
    pub fn new() -> Self {
        Self {
            readiness: Signal::new(Readiness::NotReady),
            status: Signal::new(PlaybackStatus::Unstarted),
            position: Signal::new(0.0),
            duration: Signal::new(FALLBACK_DURATION),
            loop_start: Signal::new(0.0),
            loop_end: Signal::new(LoopRegion::INITIAL_END),
            looping: Signal::new(true),
            volume: Signal::new(Volume::DEFAULT),
            rate: Signal::new(PlaybackRate::DEFAULT),
            url: Signal::new(String::new()),
        }
    }

    /// Current loop parameters as one snapshot.
    pub fn loop_region(&self) -> LoopRegion {
        LoopRegion::new(
            *self.loop_start.read(),
            *self.loop_end.read(),
            *self.looping.read(),
        )
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

//! Core domain types for Encore.

pub mod loop_region;
pub mod playback;
pub mod video;

pub use loop_region::LoopRegion;
pub use playback::{format_seconds, PlaybackRate, Volume};
pub use video::{VideoId, DEFAULT_VIDEO_ID};

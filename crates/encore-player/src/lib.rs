//! # encore-player
//!
//! The playback side of Encore: the [`RemotePlayer`] capability trait the
//! rest of the app talks through, and the [`LoopMonitor`] that implements
//! A-B looping by polling the player.

pub mod monitor;
pub mod remote;

pub use monitor::{LoopMonitor, POLL_INTERVAL};
pub use remote::RemotePlayer;

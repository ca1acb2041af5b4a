//! Remote-control interface to the embedded player.
//!
//! The player itself lives inside the webview (the `YouTube` IFrame embed);
//! the app only holds a capability to observe and command it. Every call is
//! asynchronous and may fail — the embed can be mid-load, the bridge can be
//! gone — and callers are expected to treat a failure as "playback did not
//! advance" rather than a fatal condition.

use async_trait::async_trait;

use encore_core::{PlaybackRate, Result, VideoId, Volume};

/// Asynchronous remote control over the embedded video player.
///
/// Object-safe so UI and monitor can share one `Arc<dyn RemotePlayer>`.
#[async_trait]
pub trait RemotePlayer: Send + Sync {
    /// Total length of the loaded video in seconds.
    async fn duration(&self) -> Result<f64>;

    /// Current playback position in seconds.
    async fn current_time(&self) -> Result<f64>;

    /// Jump playback to an absolute position in seconds.
    async fn seek_to(&self, seconds: f64) -> Result<()>;

    /// Start or resume playback.
    async fn play(&self) -> Result<()>;

    /// Pause playback, keeping the position.
    async fn pause(&self) -> Result<()>;

    /// Stop playback and unload the stream.
    async fn stop(&self) -> Result<()>;

    /// Set the output volume.
    async fn set_volume(&self, volume: Volume) -> Result<()>;

    /// Set the playback speed multiplier.
    async fn set_playback_rate(&self, rate: PlaybackRate) -> Result<()>;

    /// Replace the loaded video with another one.
    async fn load_video(&self, id: &VideoId) -> Result<()>;
}

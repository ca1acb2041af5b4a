//! Request bridge between the app and the embedded player.
//!
//! `document::eval` may only run on the UI scope, while the loop monitor
//! polls from a tokio task. The bridge closes that gap with the actor-handle
//! idiom: [`PlayerBridge`] is a cloneable, `Send` handle that enqueues
//! requests carrying a oneshot reply channel, and the pump future on the UI
//! scope serves them against the embed one at a time.

use async_trait::async_trait;
use dioxus::document;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use encore_core::{Error, PlaybackRate, Result, VideoId, Volume};
use encore_player::RemotePlayer;

/// Commands pushed to the embed, no reply payload.
#[derive(Debug, Clone)]
pub enum PlayerCommand {
    /// Start or resume playback.
    Play,
    /// Pause playback.
    Pause,
    /// Stop playback and unload the stream.
    Stop,
    /// Seek to a position in seconds.
    SeekTo(f64),
    /// Set volume (0 to 100).
    SetVolume(Volume),
    /// Set the playback speed multiplier.
    SetPlaybackRate(PlaybackRate),
    /// Replace the loaded video.
    LoadVideo(VideoId),
}

/// Reads answered with a number.
#[derive(Debug, Clone, Copy)]
pub enum PlayerQuery {
    /// Current playback position in seconds.
    CurrentTime,
    /// Total video length in seconds.
    Duration,
}

/// One queued bridge request.
#[derive(Debug)]
pub enum BridgeRequest {
    Command {
        command: PlayerCommand,
        reply: oneshot::Sender<Result<()>>,
    },
    Query {
        query: PlayerQuery,
        reply: oneshot::Sender<Result<f64>>,
    },
}

/// Cloneable remote-control handle over the request channel.
#[derive(Clone)]
pub struct PlayerBridge {
    tx: mpsc::UnboundedSender<BridgeRequest>,
}

impl PlayerBridge {
    /// Create a bridge plus the receiving end the pump will serve.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<BridgeRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    async fn command(&self, command: PlayerCommand) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BridgeRequest::Command {
                command,
                reply: reply_tx,
            })
            .map_err(|_| Error::BridgeClosed)?;
        reply_rx.await.map_err(|_| Error::BridgeClosed)?
    }

    async fn query(&self, query: PlayerQuery) -> Result<f64> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BridgeRequest::Query {
                query,
                reply: reply_tx,
            })
            .map_err(|_| Error::BridgeClosed)?;
        reply_rx.await.map_err(|_| Error::BridgeClosed)?
    }
}

#[async_trait]
impl RemotePlayer for PlayerBridge {
    async fn duration(&self) -> Result<f64> {
        self.query(PlayerQuery::Duration).await
    }

    async fn current_time(&self) -> Result<f64> {
        self.query(PlayerQuery::CurrentTime).await
    }

    async fn seek_to(&self, seconds: f64) -> Result<()> {
        self.command(PlayerCommand::SeekTo(seconds)).await
    }

    async fn play(&self) -> Result<()> {
        self.command(PlayerCommand::Play).await
    }

    async fn pause(&self) -> Result<()> {
        self.command(PlayerCommand::Pause).await
    }

    async fn stop(&self) -> Result<()> {
        self.command(PlayerCommand::Stop).await
    }

    async fn set_volume(&self, volume: Volume) -> Result<()> {
        self.command(PlayerCommand::SetVolume(volume)).await
    }

    async fn set_playback_rate(&self, rate: PlaybackRate) -> Result<()> {
        self.command(PlayerCommand::SetPlaybackRate(rate)).await
    }

    async fn load_video(&self, id: &VideoId) -> Result<()> {
        self.command(PlayerCommand::LoadVideo(id.clone())).await
    }
}

/// JS fragment for a command. The player object is installed at
/// `window.__encore.player` by `assets/player.js` once the IFrame API fires
/// its ready callback.
fn command_script(command: &PlayerCommand) -> String {
    match command {
        PlayerCommand::Play => "window.__encore.player.playVideo();".into(),
        PlayerCommand::Pause => "window.__encore.player.pauseVideo();".into(),
        PlayerCommand::Stop => "window.__encore.player.stopVideo();".into(),
        PlayerCommand::SeekTo(seconds) => {
            format!("window.__encore.player.seekTo({seconds}, true);")
        }
        PlayerCommand::SetVolume(volume) => {
            format!("window.__encore.player.setVolume({});", volume.as_percent())
        }
        PlayerCommand::SetPlaybackRate(rate) => {
            format!(
                "window.__encore.player.setPlaybackRate({});",
                rate.as_f64()
            )
        }
        // JSON-encode the id: it is raw user input and needs escaping.
        PlayerCommand::LoadVideo(id) => {
            format!(
                "window.__encore.player.loadVideoById({});",
                serde_json::json!(id.as_str())
            )
        }
    }
}

const fn query_script(query: PlayerQuery) -> &'static str {
    match query {
        PlayerQuery::CurrentTime => "return window.__encore.player.getCurrentTime();",
        PlayerQuery::Duration => "return window.__encore.player.getDuration();",
    }
}

/// Evaluate a command against the embed. UI scope only.
pub async fn eval_command(command: &PlayerCommand) -> Result<()> {
    document::eval(&command_script(command))
        .await
        .map(|_| ())
        .map_err(|e| Error::Eval(e.to_string()))
}

/// Evaluate a query against the embed. UI scope only.
pub async fn eval_query(query: PlayerQuery) -> Result<f64> {
    let value = document::eval(query_script(query))
        .await
        .map_err(|e| Error::Eval(e.to_string()))?;
    value
        .as_f64()
        .ok_or_else(|| Error::MalformedReply(value.to_string()))
}

/// Whether the embed has run its ready callback yet.
pub async fn probe_ready() -> bool {
    document::eval("return !!(window.__encore && window.__encore.ready);")
        .await
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

/// The embed's numeric player-state code, if it answers.
pub async fn probe_status() -> Option<i64> {
    document::eval("return window.__encore.player.getPlayerState();")
        .await
        .ok()?
        .as_i64()
}

/// Serve one bridge request. Before the embed is ready every request is
/// answered with a not-ready error instead of touching the webview.
pub async fn serve_request(request: BridgeRequest, ready: bool) {
    match request {
        BridgeRequest::Command { command, reply } => {
            let result = if ready {
                eval_command(&command).await
            } else {
                Err(Error::PlayerNotReady)
            };
            if let Err(e) = &result {
                warn!("player command {command:?} failed: {e}");
            }
            // The caller may have given up on the reply; that is fine.
            let _ = reply.send(result);
        }
        BridgeRequest::Query { query, reply } => {
            let result = if ready {
                eval_query(query).await
            } else {
                Err(Error::PlayerNotReady)
            };
            let _ = reply.send(result);
        }
    }
}

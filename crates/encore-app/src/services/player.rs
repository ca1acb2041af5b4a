//! Player service connecting UI to the embedded player.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::{debug, info, warn};

use encore_core::{LoopRegion, PlaybackRate, VideoId, Volume};
use encore_player::{LoopMonitor, RemotePlayer};

use crate::services::bridge::{self, BridgeRequest, PlayerBridge, PlayerCommand, PlayerQuery};
use crate::state::player::{PlaybackStatus, Readiness};
use crate::state::AppState;

/// How often the pump refreshes the position readout and playback status.
const SYNC_INTERVAL: Duration = Duration::from_millis(500);

/// How often the pump probes the embed before it reports ready.
const READY_PROBE_INTERVAL: Duration = Duration::from_millis(250);

/// Service owning the bridge to the embed and the loop monitor.
#[derive(Clone)]
pub struct PlayerService {
    bridge: PlayerBridge,
    /// Receiving end of the bridge; the pump claims it once at startup.
    requests: Arc<Mutex<Option<mpsc::UnboundedReceiver<BridgeRequest>>>>,
    monitor: Arc<Mutex<LoopMonitor>>,
}

impl PlayerService {
    /// Create a new player service.
    pub fn new() -> Self {
        let (bridge, requests) = PlayerBridge::channel();
        Self {
            bridge,
            requests: Arc::new(Mutex::new(Some(requests))),
            monitor: Arc::new(Mutex::new(LoopMonitor::new())),
        }
    }

    /// Capability handle for anything that needs to drive the player.
    pub fn player(&self) -> Arc<dyn RemotePlayer> {
        Arc::new(self.bridge.clone())
    }

    fn take_requests(&self) -> Option<mpsc::UnboundedReceiver<BridgeRequest>> {
        self.requests.lock().take()
    }

    /// Restart the loop monitor with a fresh parameter snapshot. A disabled
    /// region stops it.
    pub fn restart_monitor(&self, region: LoopRegion, rate: PlaybackRate) {
        self.monitor.lock().start(self.player(), region, rate);
    }

    /// The Play button: rewind to the loop start, then start playback.
    pub fn play_from(&self, start: f64) {
        let player = self.bridge.clone();
        spawn(async move {
            if let Err(e) = player.seek_to(start).await {
                warn!("play: seek failed: {e}");
                return;
            }
            if let Err(e) = player.play().await {
                warn!("play failed: {e}");
            }
        });
    }

    /// Pause playback, keeping the position.
    pub fn pause(&self) {
        let player = self.bridge.clone();
        spawn(async move {
            if let Err(e) = player.pause().await {
                warn!("pause failed: {e}");
            }
        });
    }

    /// The Stop button: park the position at the loop start, then stop.
    pub fn stop_at(&self, start: f64) {
        let player = self.bridge.clone();
        spawn(async move {
            if let Err(e) = player.seek_to(start).await {
                warn!("stop: seek failed: {e}");
            }
            if let Err(e) = player.stop().await {
                warn!("stop failed: {e}");
            }
        });
    }

    /// Push a volume change to the embed.
    pub fn set_volume(&self, volume: Volume) {
        let player = self.bridge.clone();
        spawn(async move {
            if let Err(e) = player.set_volume(volume).await {
                warn!("volume change failed: {e}");
            }
        });
    }

    /// Push a playback-rate change to the embed.
    pub fn set_playback_rate(&self, rate: PlaybackRate) {
        let player = self.bridge.clone();
        spawn(async move {
            if let Err(e) = player.set_playback_rate(rate).await {
                warn!("rate change failed: {e}");
            }
        });
    }

    /// Swap the loaded video.
    pub fn load_video(&self, id: VideoId) {
        let player = self.bridge.clone();
        spawn(async move {
            if let Err(e) = player.load_video(&id).await {
                warn!("loading {id} failed: {e}");
            }
        });
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to initialize and use the player service.
pub fn use_player_service() -> Signal<PlayerService> {
    use_context_provider(|| Signal::new(PlayerService::new()))
}

/// Hook that drives the webview side of the bridge.
///
/// One future owns every `document::eval`: it waits for the embed's ready
/// flag while answering early requests with a not-ready error, performs the
/// on-ready duties (read the duration, align the loop end with it, push the
/// initial volume and rate), then serves bridge requests while keeping the
/// position readout and playback status fresh.
pub fn use_player_sync(player: Signal<PlayerService>, app_state: AppState) {
    let mut readiness = app_state.player.readiness;
    let mut status = app_state.player.status;
    let mut position = app_state.player.position;
    let mut duration = app_state.player.duration;
    let mut loop_end = app_state.player.loop_end;
    let volume = app_state.player.volume;
    let rate = app_state.player.rate;

    use_future(move || async move {
        let Some(mut requests) = player.read().take_requests() else {
            warn!("player sync started twice; ignoring");
            return;
        };

        // Phase 1: readiness handshake. Early arrivals (the monitor starts
        // polling immediately) are answered instead of piling up.
        loop {
            while let Ok(request) = requests.try_recv() {
                bridge::serve_request(request, false).await;
            }
            if bridge::probe_ready().await {
                break;
            }
            sleep(READY_PROBE_INTERVAL).await;
        }
        info!("embed signalled ready");

        match bridge::eval_query(PlayerQuery::Duration).await {
            Ok(total) => {
                *duration.write() = total;
                *loop_end.write() = total;
            }
            Err(e) => warn!("duration read failed: {e}"),
        }
        let _ = bridge::eval_command(&PlayerCommand::SetVolume(*volume.peek())).await;
        let _ = bridge::eval_command(&PlayerCommand::SetPlaybackRate(*rate.peek())).await;
        *readiness.write() = Readiness::Ready;

        // Phase 2: serve requests, refreshing the readout between them.
        let mut sync = interval(SYNC_INTERVAL);
        sync.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                request = requests.recv() => {
                    match request {
                        Some(request) => bridge::serve_request(request, true).await,
                        None => break,
                    }
                }
                _ = sync.tick() => {
                    if let Ok(seconds) = bridge::eval_query(PlayerQuery::CurrentTime).await {
                        *position.write() = seconds;
                    }
                    // Loading another video changes the duration without a
                    // second ready callback; pick it up here.
                    if let Ok(total) = bridge::eval_query(PlayerQuery::Duration).await {
                        if (total - *duration.peek()).abs() > f64::EPSILON {
                            *duration.write() = total;
                        }
                    }
                    if let Some(code) = bridge::probe_status().await {
                        let observed = PlaybackStatus::from_embed_code(code);
                        if observed != *status.peek() {
                            debug!(?observed, "player state changed");
                            *status.write() = observed;
                        }
                    }
                }
            }
        }
    });
}

/// Hook that restarts the loop monitor whenever looping, the loop bounds, or
/// the playback rate change.
///
/// `use_effect` re-runs when any signal read inside it changes, which is
/// what keeps the monitor honest: cancel the old interval, capture the
/// current values, reschedule. A tick therefore never sees a stale
/// threshold.
pub fn use_loop_monitor(player: Signal<PlayerService>, app_state: AppState) {
    let looping = app_state.player.looping;
    let loop_start = app_state.player.loop_start;
    let loop_end = app_state.player.loop_end;
    let rate = app_state.player.rate;

    use_effect(move || {
        let region = LoopRegion::new(*loop_start.read(), *loop_end.read(), *looping.read());
        let rate = *rate.read();
        player.peek().restart_monitor(region, rate);
    });
}

//! The A-B loop monitor.
//!
//! A periodic poller that samples the player position every
//! [`POLL_INTERVAL`] and rewinds to the loop start once the position passes
//! the loop threshold. Ticks may overlap if a single read outlives the
//! interval; the worst case is one redundant seek, so no locking is needed
//! around the player.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, trace};

use encore_core::{LoopRegion, PlaybackRate};

use crate::remote::RemotePlayer;

/// How often the monitor samples the player position.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Owns the polling task, at most one at a time.
///
/// Parameters are captured when a task is spawned. Callers restart the
/// monitor whenever the region, the rate, or the enabled flag changes, so a
/// tick always compares against the values current at spawn time rather than
/// a stale one-off capture.
pub struct LoopMonitor {
    task: Option<JoinHandle<()>>,
}

impl LoopMonitor {
    pub const fn new() -> Self {
        Self { task: None }
    }

    /// Begin polling with a fresh parameter snapshot.
    ///
    /// Idempotent: an already-running task is aborted before the new one is
    /// spawned, so two intervals never run concurrently. A disabled region
    /// leaves the monitor stopped.
    pub fn start(
        &mut self,
        player: Arc<dyn RemotePlayer>,
        region: LoopRegion,
        rate: PlaybackRate,
    ) {
        self.stop();
        if !region.enabled {
            return;
        }
        debug!(
            start = region.start,
            end = region.end,
            rate = rate.as_f64(),
            "loop monitor started"
        );
        self.task = Some(tokio::spawn(poll_loop(player, region, rate)));
    }

    /// Cancel the polling task. Safe to call when not running.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("loop monitor stopped");
        }
    }

    /// Whether a polling task is currently live.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Default for LoopMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoopMonitor {
    fn drop(&mut self) {
        // Abort the task when dropped to prevent orphaned pollers
        self.stop();
    }
}

/// One polling loop. Runs until the owning task is aborted.
///
/// A failed read or seek skips the tick and keeps polling; the player being
/// briefly unreachable must never tear the loop down.
async fn poll_loop(player: Arc<dyn RemotePlayer>, region: LoopRegion, rate: PlaybackRate) {
    let mut ticker = time::interval_at(time::Instant::now() + POLL_INTERVAL, POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let current = match player.current_time().await {
            Ok(seconds) => seconds,
            Err(e) => {
                debug!("position read failed: {e}");
                continue;
            }
        };

        if region.wrap_due(current, rate) {
            trace!(current, "loop threshold passed, rewinding");
            if let Err(e) = player.seek_to(region.start).await {
                debug!("rewind seek failed: {e}");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests use unwrap for brevity
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use encore_core::{Error, Result, VideoId, Volume};

    use super::*;

    /// Scripted player: the clock advances by `step` seconds per position
    /// read, and a seek snaps the clock the way the real engine would.
    struct FakePlayer {
        clock: Mutex<f64>,
        step: f64,
        seeks: Mutex<Vec<f64>>,
        reads: AtomicU32,
        fail_reads: AtomicBool,
    }

    impl FakePlayer {
        fn new(step: f64) -> Arc<Self> {
            Arc::new(Self {
                clock: Mutex::new(0.0),
                step,
                seeks: Mutex::new(Vec::new()),
                reads: AtomicU32::new(0),
                fail_reads: AtomicBool::new(false),
            })
        }

        fn seeks(&self) -> Vec<f64> {
            self.seeks.lock().unwrap().clone()
        }

        fn set_time(&self, seconds: f64) {
            *self.clock.lock().unwrap() = seconds;
        }

        fn time(&self) -> f64 {
            *self.clock.lock().unwrap()
        }

        fn reads(&self) -> u32 {
            self.reads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RemotePlayer for FakePlayer {
        async fn duration(&self) -> Result<f64> {
            Ok(600.0)
        }

        async fn current_time(&self) -> Result<f64> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(Error::PlayerNotReady);
            }
            let mut clock = self.clock.lock().unwrap();
            let now = *clock;
            *clock += self.step;
            Ok(now)
        }

        async fn seek_to(&self, seconds: f64) -> Result<()> {
            self.seeks.lock().unwrap().push(seconds);
            *self.clock.lock().unwrap() = seconds;
            Ok(())
        }

        async fn play(&self) -> Result<()> {
            Ok(())
        }

        async fn pause(&self) -> Result<()> {
            Ok(())
        }

        async fn stop(&self) -> Result<()> {
            Ok(())
        }

        async fn set_volume(&self, _volume: Volume) -> Result<()> {
            Ok(())
        }

        async fn set_playback_rate(&self, _rate: PlaybackRate) -> Result<()> {
            Ok(())
        }

        async fn load_video(&self, _id: &VideoId) -> Result<()> {
            Ok(())
        }
    }

    /// Let `n` poll ticks elapse on the paused test clock.
    async fn run_ticks(n: u32) {
        time::sleep(POLL_INTERVAL * n + Duration::from_millis(10)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_rewind_once_threshold_passed() {
        // duration 600, loop 30..40, rate 1.0, time advancing in 500 ms steps
        let player = FakePlayer::new(0.5);
        let mut monitor = LoopMonitor::new();
        monitor.start(
            player.clone(),
            LoopRegion::new(30.0, 40.0, true),
            PlaybackRate::DEFAULT,
        );

        // Position climbs to 39.5 over the first 80 ticks: below threshold.
        run_ticks(80).await;
        assert!(player.seeks().is_empty());

        // Tick 81 observes 40.0 and must issue exactly one rewind; afterwards
        // the position restarts from 30 and stays below the threshold.
        run_ticks(5).await;
        assert_eq!(player.seeks(), vec![30.0]);

        monitor.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_threshold_scales_with_rate() {
        let player = FakePlayer::new(0.5);
        let mut monitor = LoopMonitor::new();
        monitor.start(
            player.clone(),
            LoopRegion::new(5.0, 40.0, true),
            PlaybackRate::new(2.0),
        );

        // At 2x the comparison point is end / rate = 20 seconds.
        run_ticks(40).await;
        assert!(player.seeks().is_empty());
        run_ticks(1).await;
        assert_eq!(player.seeks(), vec![5.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_region_spawns_nothing() {
        let player = FakePlayer::new(0.5);
        let mut monitor = LoopMonitor::new();
        monitor.start(
            player.clone(),
            LoopRegion::new(0.0, 10.0, false),
            PlaybackRate::DEFAULT,
        );

        assert!(!monitor.is_running());
        run_ticks(5).await;
        assert_eq!(player.reads(), 0);
        assert!(player.seeks().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_polling() {
        let player = FakePlayer::new(0.5);
        let mut monitor = LoopMonitor::new();
        monitor.start(
            player.clone(),
            LoopRegion::new(0.0, 400.0, true),
            PlaybackRate::DEFAULT,
        );

        run_ticks(3).await;
        assert!(monitor.is_running());
        monitor.stop();
        assert!(!monitor.is_running());

        let reads_at_stop = player.reads();
        run_ticks(20).await;
        assert_eq!(player.reads(), reads_at_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_interval_and_parameters() {
        let player = FakePlayer::new(0.0);
        let mut monitor = LoopMonitor::new();
        monitor.start(
            player.clone(),
            LoopRegion::new(0.0, 400.0, true),
            PlaybackRate::DEFAULT,
        );

        // Restarting must leave a single interval running: one read per tick.
        player.set_time(25.0);
        monitor.start(
            player.clone(),
            LoopRegion::new(10.0, 20.0, true),
            PlaybackRate::DEFAULT,
        );
        run_ticks(4).await;
        assert_eq!(player.reads(), 4);

        // And the new threshold applies on the very next tick: 25 >= 20.
        assert_eq!(player.seeks().first(), Some(&10.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_failures_keep_the_loop_alive() {
        let player = FakePlayer::new(0.5);
        player.fail_reads.store(true, Ordering::SeqCst);
        player.set_time(5.0);

        let mut monitor = LoopMonitor::new();
        monitor.start(
            player.clone(),
            LoopRegion::new(0.0, 1.0, true),
            PlaybackRate::DEFAULT,
        );

        run_ticks(3).await;
        assert_eq!(player.reads(), 3);
        assert!(player.seeks().is_empty());

        // Once reads recover the pending rewind happens on the next tick.
        player.fail_reads.store(false, Ordering::SeqCst);
        run_ticks(1).await;
        assert_eq!(player.seeks(), vec![0.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let player = FakePlayer::new(0.5);
        let mut monitor = LoopMonitor::new();
        monitor.start(
            player.clone(),
            LoopRegion::new(0.0, 400.0, true),
            PlaybackRate::DEFAULT,
        );
        run_ticks(2).await;
        drop(monitor);

        let reads_at_drop = player.reads();
        run_ticks(10).await;
        assert_eq!(player.reads(), reads_at_drop);
    }
}

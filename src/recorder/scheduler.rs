use std::time::Duration;

use serde::Serialize;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::{RecorderState, SwapRecorder};

/// Something that can be advanced one frame at a time.
pub trait Playback {
    /// Advance by one frame. Returns the number of frames rendered.
    fn tick(&mut self) -> usize;

    /// True once nothing is left to render.
    fn is_idle(&self) -> bool;
}

impl Playback for SwapRecorder {
    fn tick(&mut self) -> usize {
        usize::from(SwapRecorder::tick(self))
    }

    fn is_idle(&self) -> bool {
        self.state() != RecorderState::Draining
    }
}

/// Outcome of a scheduler run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlaybackReport {
    /// Frames handed to render callbacks
    pub frames: usize,
    /// Scheduler ticks elapsed
    pub ticks: usize,
    /// Whether the run stopped because of cancellation
    pub cancelled: bool,
}

/// Drives a [`Playback`] at a fixed frame cadence.
#[derive(Debug, Clone)]
pub struct PlaybackScheduler {
    frame_interval: Duration,
}

impl PlaybackScheduler {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval: frame_interval.max(Duration::from_millis(1)),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Tick `target` until it goes idle or `cancel` fires.
    pub async fn run<P: Playback + ?Sized>(
        &self,
        target: &mut P,
        cancel: &CancellationToken,
    ) -> PlaybackReport {
        let mut report = PlaybackReport::default();
        let mut interval = time::interval(self.frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if target.is_idle() {
                break;
            }
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    report.cancelled = true;
                    break;
                }
                _ = interval.tick() => {
                    report.frames += target.tick();
                    report.ticks += 1;
                }
            }
        }

        tracing::debug!(
            frames = report.frames,
            ticks = report.ticks,
            cancelled = report.cancelled,
            "playback finished"
        );
        report
    }
}

impl Default for PlaybackScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(16))
    }
}

//! Run a race without a terminal UI.
//!
//! Playback still happens at the configured frame cadence so the recording
//! contract is exercised end to end; frames are only logged.

use std::fmt;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::race::{RaceDriver, RaceSize, RaceSummary};
use crate::recorder::{PlaybackReport, PlaybackScheduler, Snapshot};

#[derive(Debug, Clone, Copy)]
pub struct HeadlessOptions {
    pub size: RaceSize,
    /// Replay the recorded frames before returning
    pub playback: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadlessReport {
    pub summary: RaceSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback: Option<PlaybackReport>,
}

impl fmt::Display for HeadlessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        if let Some(playback) = &self.playback {
            write!(
                f,
                "\nplayback: {} frames over {} ticks{}",
                playback.frames,
                playback.ticks,
                if playback.cancelled {
                    " (cancelled)"
                } else {
                    ""
                }
            )?;
        }
        Ok(())
    }
}

/// Run one race and optionally drain its playback.
///
/// Ctrl+C cancels playback; the summary is still returned.
pub async fn run_headless(
    config: &Config,
    options: HeadlessOptions,
) -> anyhow::Result<HeadlessReport> {
    let mut driver = RaceDriver::new(
        &config.algorithms,
        |algorithm| {
            Box::new(move |snapshot: Snapshot| {
                tracing::trace!(%algorithm, len = snapshot.len(), "frame");
            })
        },
        config.seed,
    )?;

    let summary = driver.run_race(options.size);

    let playback = if options.playback {
        let cancel = CancellationToken::new();
        let on_interrupt = cancel.clone();
        let signal = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_interrupt.cancel();
            }
        });

        let report = PlaybackScheduler::new(config.frame_interval)
            .run(&mut driver, &cancel)
            .await;
        signal.abort();
        Some(report)
    } else {
        driver.cancel();
        None
    };

    Ok(HeadlessReport { summary, playback })
}

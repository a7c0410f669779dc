use crate::recorder::Snapshot;
use crate::sort::SortAlgorithm;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A lane's recorder rendered a snapshot
    Frame {
        algorithm: SortAlgorithm,
        snapshot: Snapshot,
    },
}

/// Whether recorded frames are being played back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Advance one frame per lane on every tick
    #[default]
    Running,
    /// Hold the current frame; single steps only
    Paused,
}

impl PlaybackMode {
    pub fn toggle(self) -> Self {
        match self {
            PlaybackMode::Running => PlaybackMode::Paused,
            PlaybackMode::Paused => PlaybackMode::Running,
        }
    }
}

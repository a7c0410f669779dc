pub mod config;
pub mod headless;
pub mod race;
pub mod recorder;
pub mod sort;
pub mod ui;
pub mod util;

pub use config::Config;
pub use headless::{run_headless, HeadlessOptions, HeadlessReport};
pub use race::{LaneResult, RaceDriver, RaceError, RaceSize, RaceSummary};
pub use recorder::{
    CountingSwapper, Playback, PlaybackReport, PlaybackScheduler, RecorderState, Snapshot,
    SwapRecorder, Swapper,
};
pub use sort::SortAlgorithm;
pub use ui::App;

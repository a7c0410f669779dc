//! Swap recording and time-paced playback.
//!
//! Sorting runs synchronously and finishes before anything is drawn. Every
//! reordering goes through a [`Swapper`]; the [`SwapRecorder`] implementation
//! captures a full snapshot of the array after each swap. Playback is pulled
//! one frame at a time through [`Playback::tick`], either by a UI event loop
//! or by the async [`PlaybackScheduler`].

mod scheduler;
mod swap_recorder;

pub use scheduler::{Playback, PlaybackReport, PlaybackScheduler};
pub use swap_recorder::{
    CountingSwapper, RecorderState, RenderFn, Snapshot, SwapRecorder, Swapper,
};

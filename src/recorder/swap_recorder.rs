use std::collections::VecDeque;
use std::fmt;

/// Full copy of the array contents at one instant.
pub type Snapshot = Vec<f64>;

/// Render target for a recorder. Called once per played-back frame.
pub type RenderFn = Box<dyn FnMut(Snapshot) + Send>;

/// The only way a sort algorithm may reorder elements.
pub trait Swapper {
    fn swap(&mut self, a: &mut [f64], i: usize, j: usize);
}

/// Swapper that performs and counts swaps without recording them.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingSwapper {
    pub swaps: usize,
}

impl CountingSwapper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Swapper for CountingSwapper {
    fn swap(&mut self, a: &mut [f64], i: usize, j: usize) {
        if i == j {
            return;
        }
        a.swap(i, j);
        self.swaps += 1;
    }
}

/// Lifecycle of a recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    /// Nothing queued
    Idle,
    /// Snapshots queued, playback not started
    Recording,
    /// Playback started and snapshots remain
    Draining,
}

/// Records swaps as snapshots and replays them one frame per tick.
pub struct SwapRecorder {
    render: RenderFn,
    queue: VecDeque<Snapshot>,
    counter: usize,
    playing: bool,
}

impl SwapRecorder {
    pub fn new(render: impl FnMut(Snapshot) + Send + 'static) -> Self {
        Self {
            render: Box::new(render),
            queue: VecDeque::new(),
            counter: 0,
            playing: false,
        }
    }

    /// Append a snapshot to the playback queue.
    ///
    /// The counter always equals the queue length while no playback is
    /// running.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.queue.push_back(snapshot);
        self.counter += 1;
    }

    /// Drop all queued snapshots and stop playback.
    ///
    /// Frames that were already rendered stay rendered.
    pub fn clear(&mut self) {
        self.counter = 0;
        self.queue.clear();
        self.playing = false;
    }

    /// Start draining the queue and return the swap count as of now.
    pub fn show_process(&mut self) -> usize {
        self.playing = true;
        tracing::trace!(
            swaps = self.counter,
            queued = self.queue.len(),
            "playback started"
        );
        self.counter
    }

    /// Render the next queued snapshot, if playback is active.
    ///
    /// Returns `true` when a frame was rendered. Once the queue runs dry the
    /// recorder goes back to idle and further ticks are no-ops.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        match self.queue.pop_front() {
            Some(snapshot) => {
                (self.render)(snapshot);
                true
            }
            None => {
                self.playing = false;
                false
            }
        }
    }

    /// Render a frame right away, bypassing the queue.
    pub fn present(&mut self, snapshot: Snapshot) {
        (self.render)(snapshot);
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Number of snapshots still waiting to be rendered.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn state(&self) -> RecorderState {
        match (self.queue.is_empty(), self.playing) {
            (true, _) => RecorderState::Idle,
            (false, false) => RecorderState::Recording,
            (false, true) => RecorderState::Draining,
        }
    }

    /// Queued snapshots, oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.queue.iter()
    }
}

impl Swapper for SwapRecorder {
    fn swap(&mut self, a: &mut [f64], i: usize, j: usize) {
        if i == j {
            return;
        }
        a.swap(i, j);
        self.record(a.to_vec());
    }
}

impl fmt::Debug for SwapRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwapRecorder")
            .field("queued", &self.queue.len())
            .field("counter", &self.counter)
            .field("state", &self.state())
            .finish()
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::recorder::{Playback, RecorderState, RenderFn, SwapRecorder};
use crate::sort::{is_sorted, SortAlgorithm};

use super::{LaneResult, RaceError, RaceSize, RaceSummary};

/// One algorithm's slot in the race, with its recorder.
#[derive(Debug)]
pub struct Lane {
    algorithm: SortAlgorithm,
    recorder: SwapRecorder,
    swaps: usize,
    sorted: bool,
}

impl Lane {
    fn new(algorithm: SortAlgorithm, render: RenderFn) -> Self {
        Self {
            algorithm,
            recorder: SwapRecorder::new(render),
            swaps: 0,
            sorted: true,
        }
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Swaps recorded in the latest race. Does not shrink during playback.
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Frames still waiting to be rendered
    pub fn remaining(&self) -> usize {
        self.recorder.len()
    }

    pub fn state(&self) -> RecorderState {
        self.recorder.state()
    }

    pub fn recorder(&self) -> &SwapRecorder {
        &self.recorder
    }

    fn result(&self) -> LaneResult {
        LaneResult {
            algorithm: self.algorithm,
            swaps: self.swaps,
            sorted: self.sorted,
        }
    }
}

/// Runs races and owns every lane whose playback may be in flight.
///
/// A race runs all algorithms to completion first and only then starts
/// playback, so swap totals are fixed before the first frame is drawn.
#[derive(Debug)]
pub struct RaceDriver {
    lanes: Vec<Lane>,
    rng: StdRng,
    seed: u64,
    race_id: u64,
}

impl RaceDriver {
    /// Create a driver with one lane per algorithm.
    ///
    /// `renderer` is called once per algorithm to obtain that lane's render
    /// target. Without a `seed` one is drawn from the OS and reported in
    /// every [`RaceSummary`].
    pub fn new<F>(
        algorithms: &[SortAlgorithm],
        mut renderer: F,
        seed: Option<u64>,
    ) -> Result<Self, RaceError>
    where
        F: FnMut(SortAlgorithm) -> RenderFn,
    {
        if algorithms.is_empty() {
            return Err(RaceError::NoAlgorithms);
        }
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let lanes = algorithms
            .iter()
            .map(|&alg| Lane::new(alg, renderer(alg)))
            .collect();

        tracing::debug!(seed, lanes = algorithms.len(), "race driver created");

        Ok(Self {
            lanes,
            rng: StdRng::seed_from_u64(seed),
            seed,
            race_id: 0,
        })
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Id of the most recent race, 0 before the first one.
    pub fn race_id(&self) -> u64 {
        self.race_id
    }

    /// Generate `size` independent values in `[0, 1)`.
    pub fn generate(&mut self, size: RaceSize) -> Vec<f64> {
        (0..size.get()).map(|_| self.rng.random::<f64>()).collect()
    }

    /// Run a race over a freshly generated random array.
    pub fn run_race(&mut self, size: RaceSize) -> RaceSummary {
        let input = self.generate(size);
        self.run_race_with(&input)
    }

    /// Run a race over `input`.
    ///
    /// Playback of the previous race is cancelled first. Every lane sorts its
    /// own copy of `input`; playback starts only after the last lane is done.
    pub fn run_race_with(&mut self, input: &[f64]) -> RaceSummary {
        self.cancel();
        self.race_id += 1;

        let span = tracing::info_span!("race", race_id = self.race_id, size = input.len());
        let _enter = span.enter();

        for lane in &mut self.lanes {
            let mut a = input.to_vec();
            lane.recorder.present(a.clone());
            lane.algorithm.run(&mut a, &mut lane.recorder);
            lane.swaps = lane.recorder.counter();
            lane.sorted = is_sorted(&a);

            if !lane.sorted {
                tracing::warn!(algorithm = %lane.algorithm, "lane finished unsorted");
            }
            tracing::debug!(algorithm = %lane.algorithm, swaps = lane.swaps, "lane recorded");
        }

        for lane in &mut self.lanes {
            lane.recorder.show_process();
        }

        let summary = RaceSummary {
            race_id: self.race_id,
            size: input.len(),
            seed: self.seed,
            results: self.lanes.iter().map(Lane::result).collect(),
        };
        tracing::info!(total_swaps = summary.total_swaps(), "race recorded");
        summary
    }

    /// Stop all playback and discard undrained frames.
    pub fn cancel(&mut self) {
        let in_flight = self
            .lanes
            .iter()
            .filter(|lane| lane.state() != RecorderState::Idle)
            .count();
        if in_flight > 0 {
            tracing::debug!(in_flight, "cancelling playback");
        }
        for lane in &mut self.lanes {
            lane.recorder.clear();
        }
    }

    /// Frames still queued across all lanes
    pub fn remaining(&self) -> usize {
        self.lanes.iter().map(Lane::remaining).sum()
    }

    /// Render one frame per lane regardless of any outer cadence.
    pub fn step(&mut self) -> usize {
        Playback::tick(self)
    }
}

impl Playback for RaceDriver {
    /// Render at most one frame per lane.
    fn tick(&mut self) -> usize {
        self.lanes
            .iter_mut()
            .map(|lane| usize::from(lane.recorder.tick()))
            .sum()
    }

    fn is_idle(&self) -> bool {
        self.lanes
            .iter()
            .all(|lane| lane.state() != RecorderState::Draining)
    }
}

use std::fmt;

use serde::Serialize;

use crate::sort::SortAlgorithm;

/// Swap totals for one algorithm in one race
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneResult {
    pub algorithm: SortAlgorithm,
    pub swaps: usize,
    pub sorted: bool,
}

/// What a race produced, known before any playback starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceSummary {
    pub race_id: u64,
    pub size: usize,
    pub seed: u64,
    pub results: Vec<LaneResult>,
}

impl RaceSummary {
    /// The algorithm that needed the fewest swaps. Ties go to the earlier lane.
    pub fn winner(&self) -> Option<&LaneResult> {
        self.results
            .iter()
            .reduce(|best, r| if r.swaps < best.swaps { r } else { best })
    }

    pub fn total_swaps(&self) -> usize {
        self.results.iter().map(|r| r.swaps).sum()
    }

    pub fn result(&self, algorithm: SortAlgorithm) -> Option<&LaneResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }
}

impl fmt::Display for RaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "race #{} (size {}, seed {})",
            self.race_id, self.size, self.seed
        )?;
        writeln!(f, "{:<16} {:>10}  {}", "algorithm", "swaps", "sorted")?;
        for r in &self.results {
            writeln!(
                f,
                "{:<16} {:>10}  {}",
                r.algorithm.display_name(),
                r.swaps,
                if r.sorted { "yes" } else { "NO" }
            )?;
        }
        if let Some(winner) = self.winner() {
            write!(f, "fewest swaps: {}", winner.algorithm.display_name())?;
        }
        Ok(())
    }
}

//! The instrumented sort algorithms.
//!
//! Each algorithm sorts ascending in place and performs every reordering
//! through the supplied [`Swapper`]. Bubble, insertion and comb sort compare
//! strictly, so equal neighbours never swap. Heap sort swaps a parent with an
//! equal child, and quick sort always moves the pivot to the range's end and
//! back, so both can record swaps on runs of equal values.

pub mod bubble;
pub mod comb;
pub mod heap;
pub mod insertion;
pub mod quick;
pub mod selection;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::recorder::Swapper;

/// The algorithms that take part in a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Heap,
    Comb,
}

impl SortAlgorithm {
    /// Every algorithm, in race order.
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Comb,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Comb => "comb",
        }
    }

    /// Human readable panel title
    pub fn display_name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Comb => "Comb Sort",
        }
    }

    /// Sort `a` to completion, routing every swap through `swapper`.
    pub fn run<S: Swapper + ?Sized>(self, a: &mut [f64], swapper: &mut S) {
        match self {
            SortAlgorithm::Bubble => bubble::sort(a, swapper),
            SortAlgorithm::Selection => selection::sort(a, swapper),
            SortAlgorithm::Insertion => insertion::sort(a, swapper),
            SortAlgorithm::Quick => quick::sort(a, swapper),
            SortAlgorithm::Heap => heap::sort(a, swapper),
            SortAlgorithm::Comb => comb::sort(a, swapper),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for SortAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_suffix("-sort").unwrap_or(&key);
        SortAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == key)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// True if `a` is in non-decreasing order.
pub fn is_sorted(a: &[f64]) -> bool {
    a.windows(2).all(|w| w[0] <= w[1])
}

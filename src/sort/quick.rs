//! Quick sort with a middle-index pivot and Lomuto partitioning.
//!
//! Partitions are processed from an explicit work stack instead of the call
//! stack. The left partition is always finished before the right one, which
//! keeps the swap sequence identical to the plain recursive formulation.

use crate::recorder::Swapper;

pub fn sort<S: Swapper + ?Sized>(a: &mut [f64], swapper: &mut S) {
    // Half-open ranges still waiting to be partitioned
    let mut pending = vec![(0, a.len())];

    while let Some((lo, hi)) = pending.pop() {
        if hi - lo < 2 {
            continue;
        }
        let right = hi - 1;
        let pivot = partition(a, lo, right, lo + (right - lo) / 2, swapper);
        pending.push((pivot + 1, hi));
        pending.push((lo, pivot));
    }
}

/// Partition `a[left..=right]` around `a[pivot_index]` and return the
/// pivot's final position.
fn partition<S: Swapper + ?Sized>(
    a: &mut [f64],
    left: usize,
    right: usize,
    pivot_index: usize,
    swapper: &mut S,
) -> usize {
    let pivot = a[pivot_index];
    swapper.swap(a, pivot_index, right);

    let mut store = left;
    for i in left..right {
        if a[i] < pivot {
            swapper.swap(a, store, i);
            store += 1;
        }
    }
    swapper.swap(a, store, right);
    store
}

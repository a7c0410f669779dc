//! Comb sort: gapped bubble passes with a geometrically shrinking gap.

use crate::recorder::Swapper;

const SHRINK_FACTOR: f64 = 0.8;

pub fn sort<S: Swapper + ?Sized>(a: &mut [f64], swapper: &mut S) {
    let len = a.len();
    let mut gap = len;
    let mut swapped = true;

    while gap > 1 || swapped {
        if gap > 1 {
            gap = (gap as f64 * SHRINK_FACTOR) as usize;
        }
        swapped = false;
        for i in 0..len.saturating_sub(gap) {
            if a[i] > a[i + gap] {
                swapper.swap(a, i, i + gap);
                swapped = true;
            }
        }
    }
}

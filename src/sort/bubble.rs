//! Bubble sort: adjacent-pair passes over a shrinking unsorted prefix.

use crate::recorder::Swapper;

pub fn sort<S: Swapper + ?Sized>(a: &mut [f64], swapper: &mut S) {
    for end in (1..a.len()).rev() {
        for j in 0..end {
            if a[j] > a[j + 1] {
                swapper.swap(a, j + 1, j);
            }
        }
    }
}

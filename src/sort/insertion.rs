//! Insertion sort by adjacent swaps.

use crate::recorder::Swapper;

pub fn sort<S: Swapper + ?Sized>(a: &mut [f64], swapper: &mut S) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && a[j] < a[j - 1] {
            swapper.swap(a, j, j - 1);
            j -= 1;
        }
    }
}

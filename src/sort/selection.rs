//! Selection sort: move the maximum of the unsorted prefix to its end.

use crate::recorder::Swapper;

pub fn sort<S: Swapper + ?Sized>(a: &mut [f64], swapper: &mut S) {
    for end in (1..a.len()).rev() {
        let mut max = end;
        for j in 0..end {
            if a[j] > a[max] {
                max = j;
            }
        }
        swapper.swap(a, max, end);
    }
}

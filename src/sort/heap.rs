//! Heap sort over an in-place max-heap.

use crate::recorder::Swapper;

pub fn sort<S: Swapper + ?Sized>(a: &mut [f64], swapper: &mut S) {
    let len = a.len();
    for start in (0..len / 2).rev() {
        sift_down(a, start, len - 1, swapper);
    }
    for end in (1..len).rev() {
        swapper.swap(a, 0, end);
        sift_down(a, 0, end - 1, swapper);
    }
}

/// Restore the heap property for `a[start..=end]` below `start`.
fn sift_down<S: Swapper + ?Sized>(a: &mut [f64], start: usize, end: usize, swapper: &mut S) {
    let mut parent = start;
    let mut child = 2 * parent + 1;
    while child <= end {
        if child < end && a[child] < a[child + 1] {
            child += 1;
        }
        if a[parent] > a[child] {
            return;
        }
        swapper.swap(a, parent, child);
        parent = child;
        child = 2 * parent + 1;
    }
}

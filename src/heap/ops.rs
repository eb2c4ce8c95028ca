//! Binary max-heap primitives over a slice.
//!
//! The heap is laid out in array order (children of `i` are `2i + 1` and
//! `2i + 2`); no node ranks strictly after its parent, so the root is the
//! worst element under the comparator.

use crate::compare::Compare;

#[inline]
fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}

/// Moves the element at `pos` towards the root until its parent is not
/// less than it
pub fn sift_up<T, C: Compare<T>>(data: &mut [T], mut pos: usize, compare: &C) {
    while pos > 0 {
        let up = parent(pos);
        if !compare.less(&data[up], &data[pos]) {
            break;
        }
        data.swap(up, pos);
        pos = up;
    }
}

/// Moves the element at `pos` towards the leaves until no child is greater
pub fn sift_down<T, C: Compare<T>>(data: &mut [T], mut pos: usize, compare: &C) {
    let len = data.len();
    loop {
        let left = 2 * pos + 1;
        if left >= len {
            break;
        }

        // Worst of the two children
        let right = left + 1;
        let child = if right < len && compare.less(&data[left], &data[right]) {
            right
        } else {
            left
        };

        if !compare.less(&data[pos], &data[child]) {
            break;
        }
        data.swap(pos, child);
        pos = child;
    }
}

/// Rearranges `data` into a heap in linear time
pub fn make_heap<T, C: Compare<T>>(data: &mut [T], compare: &C) {
    for pos in (0..data.len() / 2).rev() {
        sift_down(data, pos, compare);
    }
}

/// Checks the heap property over the whole slice
pub fn is_heap<T, C: Compare<T>>(data: &[T], compare: &C) -> bool {
    (1..data.len()).all(|pos| !compare.less(&data[parent(pos)], &data[pos]))
}

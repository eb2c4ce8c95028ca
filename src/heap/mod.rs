//! Bounded heap keeping the N best elements of a stream.
//!
//! The elements are stored in a binary max-heap under the comparator, so
//! that the root is the worst retained element: the one to evict when a
//! better candidate comes in. Pushing and popping are O(log N).

pub mod ops;

use std::cmp::Ordering;

use log::{debug, trace};

use crate::compare::{Compare, NaturalOrder};

/// A priority queue that stores only the `max_size` smallest elements
/// (under `C`) pushed so far.
///
/// Iteration follows the internal heap layout, which is not sorted; use
/// [`BoundedTopKHeap::into_sorted_vec`] to get a ranking.
#[derive(Clone, Debug)]
pub struct BoundedTopKHeap<T, C = NaturalOrder> {
    /// Heap storage, root at index 0
    data: Vec<T>,
    /// Maximum number of retained elements (at least 1)
    max_size: usize,
    compare: C,
}

impl<T: PartialOrd> BoundedTopKHeap<T> {
    /// Creates a heap keeping the `max_size` smallest values
    pub fn new(max_size: usize) -> Self {
        Self::with_compare(max_size, NaturalOrder)
    }
}

impl<T, C: Compare<T>> BoundedTopKHeap<T, C> {
    /// Upper bound on the storage reserved up front
    const MAX_PREALLOCATED: usize = 4096;

    /// Creates a heap keeping the `max_size` best elements under `compare`
    ///
    /// A `max_size` of 0 is raised to 1.
    pub fn with_compare(max_size: usize, compare: C) -> Self {
        let max_size = max_size.max(1);
        Self {
            data: Vec::with_capacity(max_size.min(Self::MAX_PREALLOCATED)),
            max_size,
            compare,
        }
    }

    /// Offers a candidate to the heap.
    ///
    /// When the heap is full, the candidate replaces the current worst
    /// element only if it is strictly better; otherwise it is dropped.
    /// Returns true if the candidate was retained.
    #[inline]
    pub fn push(&mut self, value: T) -> bool {
        if self.data.len() < self.max_size {
            self.data.push(value);
            let last = self.data.len() - 1;
            ops::sift_up(&mut self.data, last, &self.compare);
            true
        } else if self.compare.less(&value, &self.data[0]) {
            trace!("Replacing the worst element (size {})", self.data.len());
            self.data[0] = value;
            ops::sift_down(&mut self.data, 0, &self.compare);
            true
        } else {
            false
        }
    }

    /// Returns true if `push(value)` would retain the value
    #[inline]
    pub fn admits(&self, value: &T) -> bool {
        match self.top() {
            Some(worst) if self.is_full() => self.compare.less(value, worst),
            _ => true,
        }
    }

    /// Removes and returns the worst retained element
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let worst = self.data.swap_remove(0);
        ops::sift_down(&mut self.data, 0, &self.compare);
        Some(worst)
    }

    /// The worst retained element, i.e. the next one to be evicted
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.data.first()
    }

    /// Changes the capacity, discarding the worst elements if the heap
    /// holds more than `max_size` of them (0 is raised to 1)
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size.max(1);

        let surplus = self.data.len().saturating_sub(self.max_size);
        if surplus == 0 {
            return;
        }
        debug!(
            "Shrinking heap from {} to {} elements",
            self.data.len(),
            self.max_size
        );

        if surplus <= self.max_size {
            for _ in 0..surplus {
                self.pop();
            }
        } else {
            // Partition the best elements in front, then rebuild
            let compare = &self.compare;
            self.data
                .select_nth_unstable_by(self.max_size, |a, b| ordering(compare, a, b));
            self.data.truncate(self.max_size);
            ops::make_heap(&mut self.data, &self.compare);
        }
    }

    /// Consumes the heap, returning the retained elements best first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let compare = &self.compare;
        self.data.sort_by(|a, b| ordering(compare, a, b));
        self.data
    }
}

impl<T, C> BoundedTopKHeap<T, C> {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// True when a push has to evict (or reject) an element
    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.max_size
    }

    pub fn compare(&self) -> &C {
        &self.compare
    }

    /// Retained elements in heap order (the root comes first)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the retained elements in heap order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes all the elements; the capacity is kept
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Exchanges the content, capacity and comparator of two heaps
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Total order derived from a strict weak ordering
#[inline]
fn ordering<T, C: Compare<T>>(compare: &C, a: &T, b: &T) -> Ordering {
    if compare.less(a, b) {
        Ordering::Less
    } else if compare.less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<T, C: Compare<T> + Default> Default for BoundedTopKHeap<T, C> {
    fn default() -> Self {
        Self::with_compare(1, C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BoundedTopKHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C> IntoIterator for BoundedTopKHeap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a BoundedTopKHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

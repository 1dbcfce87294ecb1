// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-place reordering of exclusive spans.
//!
//! `sort*` is unstable and allocation-free (core's pattern-defeating
//! quicksort); `stable_sort*` keeps equal elements in order and may allocate
//! scratch space (alloc's merge sort).

// Crate imports
use crate::{bounds::Bounds, span::SpanMut};

// Core imports
use core::cmp::Ordering;

impl<'a, T, const N: usize> SpanMut<'a, T, N> {
    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics with a bounds-check diagnostic if either index is out of range.
    #[inline]
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.len();
        Bounds::index(a).compute_count(len);
        Bounds::index(b).compute_count(len);
        self.as_mut_slice().swap(a, b);
    }

    /// Reverses the elements in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Sorts by the elements' intrinsic order.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort_unstable();
    }

    /// Sorts by a key extracted from each element.
    #[inline]
    pub fn sort_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) {
        self.as_mut_slice().sort_unstable_by_key(key);
    }

    /// Sorts with a three-way comparator.
    #[inline]
    pub fn sort_by(&mut self, cmp: impl FnMut(&T, &T) -> Ordering) {
        self.as_mut_slice().sort_unstable_by(cmp);
    }

    /// Stable version of [`sort`](SpanMut::sort).
    #[inline]
    pub fn stable_sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort();
    }

    /// Stable version of [`sort_by_key`](SpanMut::sort_by_key).
    #[inline]
    pub fn stable_sort_by_key<K: Ord>(&mut self, key: impl FnMut(&T) -> K) {
        self.as_mut_slice().sort_by_key(key);
    }

    /// Stable version of [`sort_by`](SpanMut::sort_by).
    #[inline]
    pub fn stable_sort_by(&mut self, cmp: impl FnMut(&T, &T) -> Ordering) {
        self.as_mut_slice().sort_by(cmp);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::span::SpanMut;

    #[test]
    fn test_swap_and_reverse() {
        let mut data = [1, 2, 3, 4];
        let mut s = SpanMut::new(&mut data[..]);
        s.swap(0, 3);
        assert_eq!(s.as_slice(), &[4, 2, 3, 1]);
        s.reverse();
        assert_eq!(data, [1, 3, 2, 4]);
    }

    #[test]
    #[should_panic(expected = "bounds-check failed: 4 (index) >= 4 (len)")]
    fn test_swap_out_of_bounds() {
        let mut data = [1, 2, 3, 4];
        SpanMut::new(&mut data[..]).swap(1, 4);
    }

    #[test]
    fn test_sorts() {
        let mut data = [5, 3, 9, 1];
        SpanMut::new(&mut data[..]).sort();
        assert_eq!(data, [1, 3, 5, 9]);

        SpanMut::new(&mut data[..]).sort_by(|a, b| b.cmp(a));
        assert_eq!(data, [9, 5, 3, 1]);

        SpanMut::new(&mut data[..]).sort_by_key(|x| x % 3);
        assert_eq!(data[0] % 3, 0);
        assert_eq!(data[1] % 3, 0);
    }

    #[test]
    fn test_stable_sorts_keep_order() {
        let mut data = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        SpanMut::new(&mut data[..]).stable_sort_by_key(|p| p.0);
        assert_eq!(data, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

        SpanMut::new(&mut data[..]).stable_sort_by(|a, b| b.0.cmp(&a.0));
        assert_eq!(data, [(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')]);

        let mut words = ["b", "a", "c"];
        SpanMut::new(&mut words[..]).stable_sort();
        assert_eq!(words, ["a", "b", "c"]);
    }
}

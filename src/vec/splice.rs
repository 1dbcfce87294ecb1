// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inserting runs of elements.
//!
//! `splice` clones from an outside slice. `splice_within` clones a range of
//! the vector into itself; the source range may lie before, after, or across
//! the insertion point.

// Crate imports
use crate::{allocator::Allocator, bounds::Bounds, span::Span, vec::SpillVec};

impl<T: Clone, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Inserts clones of `src` at `idx`, shifting later elements up.
    ///
    /// If a clone panics the elements from `idx` on are leaked, never
    /// dropped twice.
    ///
    /// # Panics
    ///
    /// Panics if `idx > len`.
    #[track_caller]
    pub fn splice(&mut self, idx: usize, src: &[T]) {
        let len = self.len();
        Bounds::new().start(idx).compute_count(len);
        let n = src.len();
        if n == 0 {
            return;
        }
        self.reserve(n);
        // SAFETY: `idx <= len` and room for `n` more was reserved. `src` is a
        // shared borrow, so it cannot alias our storage.
        unsafe {
            self.open_gap(idx, n);
            self.set_len_raw(idx);
            self.data().add(idx).emplace_clone_n(Span::new(src).data(), n);
            self.set_len_raw(len + n);
        }
    }

    /// Inserts clones of this vector's own `bounds` range at `idx`.
    ///
    /// The source may lie before `idx`, after it, or straddle it; the
    /// inserted run always equals the source range as it was before the
    /// call.
    ///
    /// # Panics
    ///
    /// Panics if `idx > len` or `bounds` do not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spill_vec::SpillVec;
    ///
    /// let mut v: SpillVec<i32, 4> = SpillVec::from([0, 1, 2, 3, 4]);
    /// v.splice_within(2, 1..4);
    /// assert_eq!(v, [0, 1, 1, 2, 3, 2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn splice_within(&mut self, idx: usize, bounds: impl Into<Bounds>) {
        let len = self.len();
        Bounds::new().start(idx).compute_count(len);
        let range = bounds.into().to_range(len);
        let n = range.len();
        if n == 0 {
            return;
        }
        self.reserve(n);
        // SAFETY: both positions were checked against `len` and room for `n`
        // more was reserved. Opening the gap moves every source element at or
        // past `idx` up by `n`; those stay valid to read while the length
        // excludes them.
        unsafe {
            self.open_gap(idx, n);
            self.set_len_raw(idx);
            let base = self.data();
            for i in 0..n {
                let k = range.start + i;
                let from = if k < idx { k } else { k + n };
                base.add(idx + i).emplace_clone(base.add(from));
            }
            self.set_len_raw(len + n);
        }
    }

    /// Appends clones of `src`.
    #[inline]
    #[track_caller]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.splice(self.len(), src);
    }
}

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Moves every element of `other` onto the end of `self`, leaving
    /// `other` empty. `other` keeps its storage.
    #[track_caller]
    pub fn append<const M: usize, B: Allocator>(&mut self, other: &mut SpillVec<T, M, B>) {
        let n = other.len();
        if n == 0 {
            return;
        }
        self.reserve(n);
        let len = self.len();
        // SAFETY: room for `n` was reserved; the buffers belong to distinct
        // vectors. `other` forgets its elements before `self` claims them.
        unsafe {
            other.set_len_raw(0);
            self.data().add(len).relocate_n(other.data(), n);
            self.set_len_raw(len + n);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        testing::{values, Tracked},
        vec::SpillVec,
    };
    use alloc::{format, string::String, vec::Vec};
    use core::cell::Cell;

    fn strings(n: usize) -> SpillVec<String, 4> {
        (0..n).map(|i| format!("{i}")).collect()
    }

    #[test]
    fn test_splice() {
        let mut v: SpillVec<i32, 4> = SpillVec::from([1, 5]);
        v.splice(1, &[2, 3, 4]);
        assert_eq!(v, [1, 2, 3, 4, 5]);
        v.splice(5, &[6]);
        v.splice(0, &[0]);
        v.splice(3, &[]);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    #[should_panic(expected = "bounds-check failed: 3 (start) > 2 (len)")]
    fn test_splice_past_len_panics() {
        let mut v: SpillVec<i32, 4> = SpillVec::from([1, 2]);
        v.splice(3, &[0]);
    }

    #[test]
    fn test_splice_within_after_idx() {
        let mut v = strings(10);
        v.splice_within(3, 6..9);
        let expect = ["0", "1", "2", "6", "7", "8", "3", "4", "5", "6", "7", "8", "9"];
        assert_eq!(v, expect);
    }

    #[test]
    fn test_splice_within_before_and_straddle() {
        let mut v = strings(10);
        v.splice_within(6, 1..4);
        assert_eq!(v, ["0", "1", "2", "3", "4", "5", "1", "2", "3", "6", "7", "8", "9"]);

        let mut v = strings(10);
        v.splice_within(4, 2..7);
        assert_eq!(
            v,
            ["0", "1", "2", "3", "2", "3", "4", "5", "6", "4", "5", "6", "7", "8", "9"]
        );
    }

    /// Every insertion point and source range of a ten-element vector,
    /// against a `Vec` model.
    #[test]
    fn test_splice_within_all_cases() {
        for idx in 0..=10 {
            for start in 0..=10 {
                for end in start..=10 {
                    let mut v = strings(10);
                    let mut model: Vec<String> = v.to_vec();
                    let copy: Vec<String> = model[start..end].to_vec();
                    model.splice(idx..idx, copy);
                    v.splice_within(idx, start..end);
                    assert_eq!(v, model, "idx {idx}, range {start}..{end}");
                }
            }
        }
    }

    #[test]
    fn test_splice_within_drops_exactly_once() {
        let drops = Cell::new(0);
        {
            let mut v: SpillVec<Tracked<'_>, 2> = SpillVec::new();
            for i in 0..5 {
                v.push(Tracked::new(i, &drops));
            }
            v.splice_within(2, 1..4);
            assert_eq!(values(&v), [0, 1, 1, 2, 3, 2, 3, 4]);
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 8);
    }

    #[test]
    fn test_append_moves_elements() {
        let drops = Cell::new(0);
        let mut a: SpillVec<Tracked<'_>, 2> = SpillVec::new();
        let mut b: SpillVec<Tracked<'_>, 8> = SpillVec::new();
        a.push(Tracked::new(1, &drops));
        for i in 2..5 {
            b.push(Tracked::new(i, &drops));
        }
        a.append(&mut b);
        assert!(b.is_empty());
        assert_eq!(values(&a), [1, 2, 3, 4]);
        drop(b);
        assert_eq!(drops.get(), 0);
        drop(a);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_extend_from_slice() {
        let mut v: SpillVec<u8, 2> = SpillVec::new();
        v.extend_from_slice(b"hello");
        v.extend_from_slice(b"");
        assert_eq!(v.as_slice(), b"hello");
    }
}

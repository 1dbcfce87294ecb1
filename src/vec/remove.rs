// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::Allocator,
    bounds::Bounds,
    error::{crash, Error},
    vec::SpillVec,
};

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        let len = self.len().checked_sub(1)?;
        // SAFETY: slot `len` was the last live one.
        unsafe {
            self.set_len_raw(len);
            Some(self.data().add(len).read())
        }
    }

    /// Removes and returns the element at `idx`, shifting later elements
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len`.
    #[inline]
    #[track_caller]
    pub fn remove(&mut self, idx: usize) -> T {
        match self.try_remove(idx) {
            Ok(v) => v,
            Err(e) => crash(e),
        }
    }

    /// Removes the element at `idx`, or returns [`Error::IndexOutOfBounds`].
    pub fn try_remove(&mut self, idx: usize) -> Result<T, Error> {
        let len = self.len();
        Bounds::index(idx).check(len)?;
        // SAFETY: `idx < len`. The length drops before the tail moves so a
        // panic cannot expose the hole.
        unsafe {
            self.set_len_raw(idx);
            let out = self.data().add(idx).read();
            self.spare_span().shift_within(idx, idx + 1, len - idx - 1);
            self.set_len_raw(len - 1);
            Ok(out)
        }
    }

    /// Removes the element at `idx` and fills the hole with the last one.
    /// Does not preserve order, but is O(1).
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len`.
    #[track_caller]
    pub fn swap_remove(&mut self, idx: usize) -> T {
        let len = self.len();
        Bounds::index(idx).compute_count(len);
        // SAFETY: `idx < len`, so `len - 1` is live.
        unsafe {
            self.set_len_raw(len - 1);
            let base = self.data();
            let out = base.add(idx).read();
            if idx != len - 1 {
                base.add(idx).relocate_from(base.add(len - 1));
            }
            out
        }
    }

    /// Destroys the elements selected by `bounds` and closes the gap.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` do not fit in `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spill_vec::{Bounds, SpillVec};
    ///
    /// let mut v: SpillVec<i32, 8> = (0..8).collect();
    /// v.erase(Bounds::new().start(2).count(3));
    /// assert_eq!(v, [0, 1, 5, 6, 7]);
    /// v.erase(3..);
    /// assert_eq!(v, [0, 1, 5]);
    /// ```
    #[track_caller]
    pub fn erase(&mut self, bounds: impl Into<Bounds>) {
        let len = self.len();
        let range = bounds.into().to_range(len);
        let count = range.len();
        if count == 0 {
            return;
        }
        // SAFETY: `range` is within `[0, len)`. Until the tail is moved the
        // length excludes everything from `range.start` on, so a panicking
        // destructor only leaks.
        unsafe {
            self.set_len_raw(range.start);
            self.data().add(range.start).destroy_n(count);
            self.spare_span()
                .shift_within(range.start, range.end, len - range.end);
            self.set_len_raw(len - count);
        }
    }

    /// Destroys every element at or past `len`. Does nothing if the vector
    /// is already that short. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        let old = self.len();
        if len >= old {
            return;
        }
        // SAFETY: `[len, old)` is live; the length drops first.
        unsafe {
            self.set_len_raw(len);
            self.data().add(len).destroy_n(old - len);
        }
    }
}

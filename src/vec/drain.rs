// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, bounds::Bounds, vec::SpillVec};

// Core imports
use core::{fmt, iter::FusedIterator};

/// Owned iterator returned by [`SpillVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Elements not yet yielded are destroyed on drop, and the tail is shifted
///   down to close the gap.
/// - If the iterator is leaked the parent keeps only the prefix before the
///   drained range.
pub struct Drain<'a, T, const N: usize, A: Allocator> {
    vec: &'a mut SpillVec<T, N, A>,
    front: usize,
    back: usize, // exclusive
    tail_start: usize,
    tail_len: usize,
}

impl<T, const N: usize, A: Allocator> Iterator for Drain<'_, T, N, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `[front, back)` is live and outside the vector's length.
            Some(unsafe { self.vec.data().add(i).read() })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, const N: usize, A: Allocator> DoubleEndedIterator for Drain<'_, T, N, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`.
            Some(unsafe { self.vec.data().add(self.back).read() })
        } else {
            None
        }
    }
}

impl<T, const N: usize, A: Allocator> ExactSizeIterator for Drain<'_, T, N, A> {}
impl<T, const N: usize, A: Allocator> FusedIterator for Drain<'_, T, N, A> {}

impl<T, const N: usize, A: Allocator> Drop for Drain<'_, T, N, A> {
    fn drop(&mut self) {
        let start = self.vec.len();
        // SAFETY: `[front, back)` holds the unyielded elements and
        // `[tail_start, tail_start + tail_len)` the tail; everything between
        // `start` and the tail is dead once the rest is destroyed.
        unsafe {
            let (front, rest) = (self.front, self.back - self.front);
            self.front = self.back;
            self.vec.data().add(front).destroy_n(rest);
            self.vec
                .spare_span()
                .shift_within(start, self.tail_start, self.tail_len);
            self.vec.set_len_raw(start + self.tail_len);
        }
    }
}

impl<T: fmt::Debug, const N: usize, A: Allocator> fmt::Debug for Drain<'_, T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.vec.as_ptr();
        // SAFETY: `[front, back)` is live.
        let rest = unsafe {
            core::slice::from_raw_parts(base.add(self.front), self.back - self.front)
        };
        f.debug_tuple("Drain").field(&rest).finish()
    }
}

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Removes the elements selected by `bounds` and yields them by value.
    ///
    /// The tail of the vector is shifted down when the iterator is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` do not fit in `[0, len)`.
    ///
    /// # Examples
    /// ```
    /// # use spill_vec::SpillVec;
    /// let mut v: SpillVec<_, 4> = SpillVec::from([1, 2, 3, 4]);
    /// let drained: SpillVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// ```
    #[track_caller]
    pub fn drain(&mut self, bounds: impl Into<Bounds>) -> Drain<'_, T, N, A> {
        let len = self.len();
        let range = bounds.into().to_range(len);
        // SAFETY: the drained range and the tail leave the vector's length.
        unsafe { self.set_len_raw(range.start) };
        Drain {
            vec: self,
            front: range.start,
            back: range.end,
            tail_start: range.end,
            tail_len: len - range.end,
        }
    }
}

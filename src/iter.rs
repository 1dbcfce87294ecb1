// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`SpillVec`](crate::SpillVec).
//!
//! - `IntoIter<T, N, A>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&SpillVec` and `&mut SpillVec` iterate as slices.

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    vec::SpillVec,
};

// Core imports
use core::{fmt, iter::FusedIterator};

/// Owned iterator returned by `SpillVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yet yielded are
/// dropped with the iterator, which then releases the storage.
pub struct IntoIter<T, const N: usize, A: Allocator = Global> {
    // Length is zero; `[front, back)` is live.
    v: SpillVec<T, N, A>,
    front: usize,
    back: usize, // exclusive
}

impl<T, const N: usize, A: Allocator> IntoIter<T, N, A> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live.
        unsafe { core::slice::from_raw_parts(self.v.as_ptr().add(self.front), self.back - self.front) }
    }

    /// Drops `n` elements from the front without yielding them.
    fn skip_front(&mut self, n: usize) {
        let at = self.front;
        self.front += n;
        // SAFETY: `[at, at + n)` was live and is now outside `[front, back)`.
        unsafe { self.v.data().add(at).destroy_n(n) };
    }

    /// Drops `n` elements from the back without yielding them.
    fn skip_back(&mut self, n: usize) {
        self.back -= n;
        // SAFETY: as in `skip_front`.
        unsafe { self.v.data().add(self.back).destroy_n(n) };
    }
}

impl<T, const N: usize, A: Allocator> Iterator for IntoIter<T, N, A> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and has left `[front, back)`.
            Some(unsafe { self.v.data().add(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.skip_front(rem);
            return None;
        }
        self.skip_front(n);
        self.next()
    }
}

impl<T, const N: usize, A: Allocator> DoubleEndedIterator for IntoIter<T, N, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`.
            Some(unsafe { self.v.data().add(self.back).read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.skip_back(rem);
            return None;
        }
        self.skip_back(n);
        self.next_back()
    }
}
impl<T, const N: usize, A: Allocator> FusedIterator for IntoIter<T, N, A> {}
impl<T, const N: usize, A: Allocator> ExactSizeIterator for IntoIter<T, N, A> {}

impl<T, const N: usize, A: Allocator> Drop for IntoIter<T, N, A> {
    fn drop(&mut self) {
        self.skip_front(self.back - self.front);
    }
}

impl<T: fmt::Debug, const N: usize, A: Allocator> fmt::Debug for IntoIter<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize, A: Allocator> IntoIterator for &'a SpillVec<T, N, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize, A: Allocator> IntoIterator for &'a mut SpillVec<T, N, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize, A: Allocator> IntoIterator for SpillVec<T, N, A> {
    type Item = T;
    type IntoIter = IntoIter<T, N, A>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len();
        // SAFETY: ownership of `[0, back)` passes to the iterator.
        unsafe { self.set_len_raw(0) };
        IntoIter {
            front: 0,
            back,
            v: self,
        }
    }
}

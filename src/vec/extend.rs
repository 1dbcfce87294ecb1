// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, vec::SpillVec};

impl<T, const N: usize, A: Allocator> Extend<T> for SpillVec<T, N, A> {
    /// Pushes every item, reserving the iterator's lower size bound up front.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize, A: Allocator> Extend<&'a T> for SpillVec<T, N, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

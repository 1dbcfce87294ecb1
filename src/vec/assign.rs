// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Replacing the contents wholesale while keeping the storage.

// Crate imports
use crate::{allocator::Allocator, span::Span, vec::SpillVec};

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Replaces the contents with clones of `src`.
    ///
    /// Existing elements are assigned with [`Clone::clone_from`], so their
    /// own buffers get reused; the rest are cloned in or destroyed.
    pub fn assign(&mut self, src: &[T])
    where
        T: Clone,
    {
        let common = self.len().min(src.len());
        self.truncate(src.len());
        self.as_mut_slice()[..common].clone_from_slice(&src[..common]);
        self.extend_from_slice(&src[common..]);
    }

    /// Replaces the contents with a byte copy of `src`.
    pub fn copy_from(&mut self, src: &[T])
    where
        T: Copy,
    {
        let n = src.len();
        self.truncate(0);
        self.reserve(n);
        // SAFETY: room for `n` was reserved and `T: Copy` has no drop glue.
        unsafe {
            self.data().copy_n(Span::new(src).data(), n);
            self.set_len_raw(n);
        }
    }
}

// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bulk copies, destruction and in-buffer relocation on exclusive spans.
//!
//! `copy_from` assigns over live elements. The other operations here also
//! act on dead slots and are `unsafe`; they are what containers use to open
//! and close gaps in their storage.

// Crate imports
use crate::span::{Span, SpanMut};

/// Whether `[inner, inner + inner_len)` lies within `[outer, outer + outer_len)`,
/// by address.
#[inline]
pub(crate) fn range_within<T>(
    outer: *const T,
    outer_len: usize,
    inner: *const T,
    inner_len: usize,
) -> bool {
    let size = core::mem::size_of::<T>();
    let (o, i) = (outer as usize, inner as usize);
    o <= i && i + inner_len * size <= o + outer_len * size
}

impl<'a, T, const N: usize> SpanMut<'a, T, N> {
    /// Assigns the first `min(self.len(), src.len())` elements from `src`.
    ///
    /// Trivially copyable elements are copied with one `memcpy`.
    #[inline]
    pub fn copy_from(&mut self, src: &[T])
    where
        T: Clone,
    {
        let n = self.len().min(src.len());
        self.as_mut_slice()[..n].clone_from_slice(&src[..n]);
    }

    /// Clones the first `min(self.len(), src.len())` elements from `src` into
    /// this span's slots, which are treated as dead.
    ///
    /// # Safety
    ///
    /// The first `min(self.len(), src.len())` slots must be dead, and `src`
    /// must not overlap them.
    #[inline]
    pub unsafe fn emplace_from(&mut self, src: &[T])
    where
        T: Clone,
    {
        let n = self.len().min(src.len());
        self.data().emplace_clone_n(Span::new(src).data(), n);
    }

    /// Like [`emplace_from`](Self::emplace_from) for `Copy` elements: the
    /// first `min(self.len(), src.len())` slots are filled with one byte copy.
    ///
    /// # Safety
    ///
    /// `src` must not overlap the filled slots.
    #[inline]
    pub unsafe fn emplace_copy_from(&mut self, src: &[T])
    where
        T: Copy,
    {
        let n = self.len().min(src.len());
        self.data().copy_n(Span::new(src).data(), n);
    }

    /// Drops every element in place. The storage itself is untouched.
    ///
    /// # Safety
    ///
    /// Every slot must be live, and is dead afterwards.
    #[inline]
    pub unsafe fn destroy(&mut self) {
        self.data().destroy_n(self.len());
    }

    /// Relocates `count` live elements from offset `src` to offset `dst`
    /// within this span; the ranges may overlap.
    ///
    /// Afterwards `[dst, dst + count)` is live and holds the old
    /// `[src, src + count)` in order. Source slots outside the destination
    /// are dead.
    ///
    /// # Safety
    ///
    /// Both ranges must lie within the span. `[src, src + count)` must be
    /// live, and destination slots outside it must be dead.
    #[inline]
    pub unsafe fn shift_within(&mut self, dst: usize, src: usize, count: usize) {
        debug_assert!(dst.checked_add(count).is_some_and(|end| end <= self.len()));
        debug_assert!(src.checked_add(count).is_some_and(|end| end <= self.len()));
        let base = self.data();
        base.add(dst).relocate_overlapping(base.add(src), count);
    }

    /// Whether `that` lies entirely within this span's memory.
    #[inline]
    pub fn has_subarray(&self, that: &[T]) -> bool {
        range_within(self.as_ptr(), self.len(), that.as_ptr(), that.len())
    }
}

impl<'a, T, const N: usize> Span<'a, T, N> {
    /// Whether `that` lies entirely within this span's memory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spill_vec::Span;
    ///
    /// let data = [1, 2, 3, 4];
    /// let s = Span::new(&data[..]);
    /// assert!(s.has_subarray(&data[1..3]));
    /// assert!(!s.has_subarray(&[2, 3]));
    /// ```
    #[inline]
    pub fn has_subarray(self, that: &[T]) -> bool {
        range_within(self.as_ptr(), self.len(), that.as_ptr(), that.len())
    }
}

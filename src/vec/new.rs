// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    vec::SpillVec,
};

impl<T, const N: usize> SpillVec<T, N> {
    /// Creates an empty, inlined vector on the global heap.
    #[inline]
    pub const fn new() -> Self {
        Self::from_parts(Global)
    }

    /// Creates an empty vector with room for at least `capacity` elements.
    ///
    /// Capacities up to `N` stay inline and never allocate.
    #[inline]
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Creates an empty, inlined vector that will allocate from `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self::from_parts(alloc)
    }

    /// Creates an empty vector with room for at least `capacity` elements,
    /// allocating from `alloc`.
    #[inline]
    #[track_caller]
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        let mut v = Self::new_in(alloc);
        v.reserve(capacity);
        v
    }

    /// Creates a vector holding clones of `src`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spill_vec::{Global, SpillVec};
    ///
    /// let v: SpillVec<&str, 2> = SpillVec::from_slice_in(&["a", "b", "c"], Global);
    /// assert!(v.is_on_heap());
    /// assert_eq!(v, ["a", "b", "c"]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn from_slice_in(src: &[T], alloc: A) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new_in(alloc);
        v.extend_from_slice(src);
        v
    }
}

impl<T: Clone, const N: usize> SpillVec<T, N> {
    /// Creates a vector holding clones of `src`, on the global heap if it
    /// spills.
    #[inline]
    #[track_caller]
    pub fn from_slice(src: &[T]) -> Self {
        Self::from_slice_in(src, Global)
    }
}

impl<T, const N: usize, A: Allocator + Default> Default for SpillVec<T, N, A> {
    #[inline]
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, const N: usize, A: Allocator + Clone> Clone for SpillVec<T, N, A> {
    fn clone(&self) -> Self {
        Self::from_slice_in(self.as_slice(), self.alloc.clone())
    }

    /// Reuses `self`'s storage and keeps its allocator.
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.as_slice());
    }
}

impl<T, const N: usize, const M: usize, A: Allocator + Default> From<[T; M]> for SpillVec<T, N, A> {
    fn from(arr: [T; M]) -> Self {
        let mut v = Self::default();
        v.extend(arr);
        v
    }
}

impl<T: Clone, const N: usize, A: Allocator + Default> From<&[T]> for SpillVec<T, N, A> {
    fn from(src: &[T]) -> Self {
        Self::from_slice_in(src, A::default())
    }
}

impl<T, const N: usize, A: Allocator + Default> FromIterator<T> for SpillVec<T, N, A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::default();
        v.extend(iter);
        v
    }
}

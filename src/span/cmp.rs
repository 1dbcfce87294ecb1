// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexicographic comparison for spans.
//!
//! Spans compare against spans of any extent, slices and arrays. Comparison
//! delegates to slice comparison, which core lowers to `memcmp` when the
//! element type allows.

// Crate imports
use crate::span::{Span, SpanMut};

// Core imports
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

impl<'a, 'b, T, U, const N: usize, const M: usize> PartialEq<Span<'b, U, M>> for Span<'a, T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Span<'b, U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for Span<'_, T, N> {}

impl<T, U, const N: usize> PartialEq<[U]> for Span<'_, T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize> PartialEq<&[U]> for Span<'_, T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T, U, const N: usize, const K: usize> PartialEq<[U; K]> for Span<'_, T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; K]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, 'b, T: PartialOrd, const N: usize, const M: usize> PartialOrd<Span<'b, T, M>>
    for Span<'a, T, N>
{
    #[inline]
    fn partial_cmp(&self, other: &Span<'b, T, M>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord, const N: usize> Ord for Span<'_, T, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, const N: usize> Hash for Span<'_, T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<'a, 'b, T, U, const N: usize, const M: usize> PartialEq<SpanMut<'b, U, M>>
    for SpanMut<'a, T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &SpanMut<'b, U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for SpanMut<'_, T, N> {}

impl<T, U, const N: usize> PartialEq<[U]> for SpanMut<'_, T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize, const K: usize> PartialEq<[U; K]> for SpanMut<'_, T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; K]) -> bool {
        self.as_slice() == other
    }
}

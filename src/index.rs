// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for spans and [`SpillVec`](crate::SpillVec).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice
//! behavior with this crate's diagnostics:
//! - a `usize` selects one element and panics if it is not `< len`;
//! - [`Bounds`] and every standard range form select a sub-slice and panic
//!   with the failed bounds check;
//! - views are restricted to the live prefix `[0..len)`.

// Crate imports
use crate::{
    allocator::Allocator,
    bounds::Bounds,
    error::{crash, Error},
    span::{Span, SpanMut},
    vec::SpillVec,
};

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

#[inline]
#[track_caller]
fn element<T>(s: &[T], idx: usize) -> &T {
    match s.get(idx) {
        Some(x) => x,
        None => crash(Error::IndexOutOfBounds {
            index: idx,
            len: s.len(),
        }),
    }
}

#[inline]
#[track_caller]
fn element_mut<T>(s: &mut [T], idx: usize) -> &mut T {
    let len = s.len();
    match s.get_mut(idx) {
        Some(x) => x,
        None => crash(Error::IndexOutOfBounds { index: idx, len }),
    }
}

#[inline]
#[track_caller]
fn sub<T>(s: &[T], b: impl Into<Bounds>) -> &[T] {
    &s[b.into().to_range(s.len())]
}

#[inline]
#[track_caller]
fn sub_mut<T>(s: &mut [T], b: impl Into<Bounds>) -> &mut [T] {
    let r = b.into().to_range(s.len());
    &mut s[r]
}

impl<T, const N: usize> Index<usize> for Span<'_, T, N> {
    type Output = T;
    #[track_caller]
    fn index(&self, i: usize) -> &T {
        element(self.as_slice(), i)
    }
}

impl<T, const N: usize> Index<usize> for SpanMut<'_, T, N> {
    type Output = T;
    #[track_caller]
    fn index(&self, i: usize) -> &T {
        element(self.as_slice(), i)
    }
}
impl<T, const N: usize> IndexMut<usize> for SpanMut<'_, T, N> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut T {
        element_mut(self.as_mut_slice(), i)
    }
}

impl<T, const N: usize, A: Allocator> Index<usize> for SpillVec<T, N, A> {
    type Output = T;
    #[track_caller]
    fn index(&self, i: usize) -> &T {
        element(self.as_slice(), i)
    }
}
impl<T, const N: usize, A: Allocator> IndexMut<usize> for SpillVec<T, N, A> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut T {
        element_mut(self.as_mut_slice(), i)
    }
}

// Sub-slices: `Bounds` and every range form.
macro_rules! impl_range_index {
    ($($idx:ty),* $(,)?) => {$(
        impl<T, const N: usize> Index<$idx> for Span<'_, T, N> {
            type Output = [T];
            #[track_caller]
            fn index(&self, b: $idx) -> &[T] {
                sub(self.as_slice(), b)
            }
        }

        impl<T, const N: usize> Index<$idx> for SpanMut<'_, T, N> {
            type Output = [T];
            #[track_caller]
            fn index(&self, b: $idx) -> &[T] {
                sub(self.as_slice(), b)
            }
        }
        impl<T, const N: usize> IndexMut<$idx> for SpanMut<'_, T, N> {
            #[track_caller]
            fn index_mut(&mut self, b: $idx) -> &mut [T] {
                sub_mut(self.as_mut_slice(), b)
            }
        }

        impl<T, const N: usize, A: Allocator> Index<$idx> for SpillVec<T, N, A> {
            type Output = [T];
            #[track_caller]
            fn index(&self, b: $idx) -> &[T] {
                sub(self.as_slice(), b)
            }
        }
        impl<T, const N: usize, A: Allocator> IndexMut<$idx> for SpillVec<T, N, A> {
            #[track_caller]
            fn index_mut(&mut self, b: $idx) -> &mut [T] {
                sub_mut(self.as_mut_slice(), b)
            }
        }
    )*};
}

impl_range_index!(
    Bounds,
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
    RangeInclusive<usize>,
    RangeFull,
);

// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Borrowed contiguous views.
//!
//! [`Span`] is a shared view of `len` consecutive `T`s; [`SpanMut`] is the
//! exclusive one. Both carry the lifetime of the buffer they borrow, so a
//! span cannot outlive its owner or observe it being reallocated.
//!
//! A span may also carry a static extent `N`. `Span<'a, T>` (that is,
//! `N == DYN`) has whatever length it was built with; `Span<'a, T, 4>` is
//! checked at construction to hold exactly four elements.
//!
//! Both views deref to `[T]`, so every slice method is available as well. The
//! inherent methods below add the checked, `Option`-returning forms and the
//! relocation primitives containers are built on.

mod cmp;
mod copy;
mod find;
mod sort;

pub use find::Split;

// Crate imports
use crate::{
    bounds::Bounds,
    error::{crash, Error},
    ptr::Ptr,
};

// Core imports
use core::{
    fmt,
    marker::PhantomData,
    ops::{Deref, DerefMut},
    slice,
};

/// The extent of a dynamically sized span.
pub const DYN: usize = usize::MAX;

#[inline]
fn check_extent<const N: usize>(len: usize) -> Result<(), Error> {
    if N == DYN || N == len {
        Ok(())
    } else {
        Err(Error::ExtentMismatch {
            expected: N,
            actual: len,
        })
    }
}

/// A shared view of contiguous `T`s, with optional static extent `N`.
///
/// # Examples
///
/// ```rust
/// use spill_vec::Span;
///
/// let data = [1, 2, 3, 4, 5];
/// let s = Span::new(&data[..]);
/// assert_eq!(s.at(1), Some(&2));
/// assert_eq!(s.at(5), None);
///
/// let (head, tail) = s.split_at(2).unwrap();
/// assert_eq!(head, [1, 2]);
/// assert_eq!(tail, [3, 4, 5]);
/// ```
pub struct Span<'a, T, const N: usize = DYN> {
    slice: &'a [T],
}

impl<'a, T, const N: usize> Span<'a, T, N> {
    /// Whether the length is fixed by the type.
    pub const IS_STATIC: bool = N != DYN;

    /// Views `slice` with the static extent `N`.
    ///
    /// # Panics
    ///
    /// Panics if the span is statically sized and `slice.len() != N`.
    #[inline]
    #[track_caller]
    pub fn with_extent(slice: &'a [T]) -> Self {
        match Self::try_with_extent(slice) {
            Ok(s) => s,
            Err(e) => crash(e),
        }
    }

    /// Views `slice` with the static extent `N`, or reports an
    /// [`Error::ExtentMismatch`].
    #[inline]
    pub fn try_with_extent(slice: &'a [T]) -> Result<Self, Error> {
        check_extent::<N>(slice.len())?;
        Ok(Self { slice })
    }

    /// Re-checks this span against the static extent `M`.
    #[inline]
    pub fn try_fixed<const M: usize>(self) -> Result<Span<'a, T, M>, Error> {
        Span::try_with_extent(self.slice)
    }

    /// Re-types this span with the static extent `M`.
    ///
    /// # Panics
    ///
    /// Panics if `self.len() != M`.
    #[inline]
    #[track_caller]
    pub fn fixed<const M: usize>(self) -> Span<'a, T, M> {
        Span::with_extent(self.slice)
    }

    /// Forgets the static extent.
    #[inline]
    pub fn as_dynamic(self) -> Span<'a, T> {
        Span { slice: self.slice }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Alias of [`Span::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.slice.len()
    }

    /// Returns `true` if the span has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slice.as_ptr()
    }

    /// The first element's slot as a [`Ptr`].
    #[inline]
    pub fn data(&self) -> Ptr<T> {
        Ptr::from_non_null(slice_base(self.slice))
    }

    /// The viewed elements, for the full lifetime `'a`.
    #[inline]
    pub fn as_slice(self) -> &'a [T] {
        self.slice
    }

    // Access

    /// Returns `Some(&T)` if `idx < len`, otherwise `None`.
    #[inline]
    pub fn at(self, idx: usize) -> Option<&'a T> {
        self.slice.get(idx)
    }

    /// Returns the subspan selected by `bounds`, or `None` if it does not fit.
    #[inline]
    pub fn at_bounds(self, bounds: impl Into<Bounds>) -> Option<Span<'a, T>> {
        let r = bounds.into().try_to_range(self.len())?;
        Some(Span {
            slice: &self.slice[r],
        })
    }

    /// Returns the subspan selected by `bounds`.
    ///
    /// # Panics
    ///
    /// Panics with a bounds-check diagnostic if the range does not fit.
    #[inline]
    #[track_caller]
    pub fn slice(self, bounds: impl Into<Bounds>) -> Span<'a, T> {
        let r = bounds.into().to_range(self.len());
        Span {
            slice: &self.slice[r],
        }
    }

    /// Returns the element at `idx` without a bounds check.
    ///
    /// # Safety
    ///
    /// `idx < self.len()`.
    #[inline]
    pub unsafe fn at_unchecked(self, idx: usize) -> &'a T {
        debug_assert!(idx < self.len());
        self.slice.get_unchecked(idx)
    }

    /// Returns the subspan selected by `bounds` without a bounds check.
    ///
    /// # Safety
    ///
    /// `bounds` must fit in `[0, len)`, as [`at_bounds`](Span::at_bounds)
    /// would verify.
    #[inline]
    pub unsafe fn at_bounds_unchecked(self, bounds: impl Into<Bounds>) -> Span<'a, T> {
        let r = bounds.into().to_range_unchecked(self.len());
        Span {
            slice: self.slice.get_unchecked(r),
        }
    }

    /// The first element, if any.
    #[inline]
    pub fn first(self) -> Option<&'a T> {
        self.slice.first()
    }

    /// The last element, if any.
    #[inline]
    pub fn last(self) -> Option<&'a T> {
        self.slice.last()
    }

    // Partitioning

    /// Splits into `[0, idx)` and `[idx, len)`, or `None` if `idx > len`.
    #[inline]
    pub fn split_at(self, idx: usize) -> Option<(Span<'a, T>, Span<'a, T>)> {
        let (a, b) = self.slice.split_at_checked(idx)?;
        Some((Span { slice: a }, Span { slice: b }))
    }

    /// Splits off the first `n` elements, or `None` if there are fewer.
    #[inline]
    pub fn split_first(self, n: usize) -> Option<(Span<'a, T>, Span<'a, T>)> {
        self.split_at(n)
    }

    /// Splits off the last `n` elements, or `None` if there are fewer.
    ///
    /// Returns `(rest, last_n)`.
    #[inline]
    pub fn split_last(self, n: usize) -> Option<(Span<'a, T>, Span<'a, T>)> {
        let idx = self.len().checked_sub(n)?;
        self.split_at(idx)
    }

    /// Splits off the first `M` elements as an array reference.
    #[inline]
    pub fn split_first_array<const M: usize>(self) -> Option<(&'a [T; M], Span<'a, T>)> {
        let (head, rest) = self.split_at(M)?;
        let head = head.slice.try_into().ok()?;
        Some((head, rest))
    }

    /// Splits off the last `M` elements as an array reference.
    ///
    /// Returns `(rest, last_m)`.
    #[inline]
    pub fn split_last_array<const M: usize>(self) -> Option<(Span<'a, T>, &'a [T; M])> {
        let (rest, tail) = self.split_last(M)?;
        let tail = tail.slice.try_into().ok()?;
        Some((rest, tail))
    }
}

impl<'a, T> Span<'a, T> {
    /// Views `slice`.
    #[inline]
    pub const fn new(slice: &'a [T]) -> Self {
        Self { slice }
    }

    /// Views `len` elements starting at `data`.
    ///
    /// # Safety
    ///
    /// `data` must point at `len` live, aligned `T`s that stay valid and
    /// unmutated for `'a`. A null `data` is allowed only with `len == 0`.
    #[inline]
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        if data.is_null() {
            debug_assert_eq!(len, 0);
            return Self::empty();
        }
        Self::new(slice::from_raw_parts(data, len))
    }

    /// An empty span.
    #[inline]
    pub const fn empty() -> Self {
        Self { slice: &[] }
    }

    /// Splits off the first `n` elements and returns them; `self` keeps the
    /// rest.
    ///
    /// If `n > len`, returns `None` and leaves `self` unchanged.
    #[inline]
    pub fn take_first(&mut self, n: usize) -> Option<Span<'a, T>> {
        let (head, rest) = self.split_at(n)?;
        *self = rest;
        Some(head)
    }

    /// Splits off the last `n` elements and returns them; `self` keeps the
    /// rest.
    ///
    /// If `n > len`, returns `None` and leaves `self` unchanged.
    #[inline]
    pub fn take_last(&mut self, n: usize) -> Option<Span<'a, T>> {
        let (rest, tail) = self.split_last(n)?;
        *self = rest;
        Some(tail)
    }
}

impl<'a, T, const N: usize> Clone for Span<'a, T, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T, const N: usize> Copy for Span<'a, T, N> {}

impl<'a, T> Default for Span<'a, T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T, const N: usize> Deref for Span<'a, T, N> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.slice
    }
}

impl<'a, T, const N: usize> AsRef<[T]> for Span<'a, T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.slice
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    #[inline]
    fn from(slice: &'a [T]) -> Self {
        Self { slice }
    }
}
impl<'a, T, const N: usize> From<&'a [T; N]> for Span<'a, T, N> {
    #[inline]
    fn from(array: &'a [T; N]) -> Self {
        Self { slice: array }
    }
}
impl<'a, T> From<&'a alloc::vec::Vec<T>> for Span<'a, T> {
    #[inline]
    fn from(v: &'a alloc::vec::Vec<T>) -> Self {
        Self { slice: v }
    }
}
impl<'a, T, const N: usize> From<SpanMut<'a, T, N>> for Span<'a, T, N> {
    #[inline]
    fn from(s: SpanMut<'a, T, N>) -> Self {
        s.into_span()
    }
}

impl<'a, T, const N: usize> IntoIterator for Span<'a, T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Span<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slice).finish()
    }
}

#[inline]
fn slice_base<T>(s: &[T]) -> core::ptr::NonNull<T> {
    // A slice's data pointer is never null, even when it is empty.
    core::ptr::NonNull::from(s).cast::<T>()
}

#[inline]
fn slice_base_mut<T>(s: &mut [T]) -> core::ptr::NonNull<T> {
    // Derived from the exclusive borrow so writes through it stay valid.
    core::ptr::NonNull::from(s).cast::<T>()
}

/// An exclusive view of contiguous `T`s, with optional static extent `N`.
///
/// Safe methods assume every viewed slot is live. The `unsafe` relocation
/// methods ([`shift_within`](SpanMut::shift_within),
/// [`emplace_from`](SpanMut::emplace_from), [`destroy`](SpanMut::destroy))
/// also work on spans whose slots are partly or wholly dead, which is how
/// containers use them over their spare capacity.
pub struct SpanMut<'a, T, const N: usize = DYN> {
    data: Ptr<T>,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T, const N: usize> SpanMut<'a, T, N> {
    /// Whether the length is fixed by the type.
    pub const IS_STATIC: bool = N != DYN;

    /// Views `slice` exclusively with the static extent `N`.
    ///
    /// # Panics
    ///
    /// Panics if the span is statically sized and `slice.len() != N`.
    #[inline]
    #[track_caller]
    pub fn with_extent(slice: &'a mut [T]) -> Self {
        match Self::try_with_extent(slice) {
            Ok(s) => s,
            Err(e) => crash(e),
        }
    }

    /// Views `slice` exclusively with the static extent `N`, or reports an
    /// [`Error::ExtentMismatch`].
    #[inline]
    pub fn try_with_extent(slice: &'a mut [T]) -> Result<Self, Error> {
        check_extent::<N>(slice.len())?;
        Ok(Self {
            len: slice.len(),
            data: Ptr::from_non_null(slice_base_mut(slice)),
            _marker: PhantomData,
        })
    }

    /// Forgets the static extent.
    #[inline]
    pub fn as_dynamic(self) -> SpanMut<'a, T> {
        SpanMut {
            data: self.data,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Reborrows as a shorter-lived exclusive span.
    #[inline]
    pub fn reborrow(&mut self) -> SpanMut<'_, T, N> {
        SpanMut {
            data: self.data,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Reborrows as a shared span.
    #[inline]
    pub fn as_span(&self) -> Span<'_, T, N> {
        Span {
            slice: self.as_slice(),
        }
    }

    /// Converts into a shared span for the full lifetime `'a`.
    #[inline]
    pub fn into_span(self) -> Span<'a, T, N> {
        Span {
            slice: self.into_slice(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`SpanMut::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the span has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first slot as a [`Ptr`].
    #[inline]
    pub fn data(&self) -> Ptr<T> {
        self.data
    }

    /// Pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.raw()
    }

    /// Mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.raw()
    }

    /// The viewed elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the safe API requires all slots to be live.
        unsafe { slice::from_raw_parts(self.data.raw(), self.len) }
    }

    /// The viewed elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `self` is borrowed exclusively.
        unsafe { slice::from_raw_parts_mut(self.data.raw(), self.len) }
    }

    /// The viewed elements, for the full lifetime `'a`.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        // SAFETY: `self` held the exclusive borrow for `'a` and is consumed.
        unsafe { slice::from_raw_parts_mut(self.data.raw(), self.len) }
    }

    // Access

    /// Returns `Some(&T)` if `idx < len`, otherwise `None`.
    #[inline]
    pub fn at(&self, idx: usize) -> Option<&T> {
        self.as_slice().get(idx)
    }

    /// Returns `Some(&mut T)` if `idx < len`, otherwise `None`.
    #[inline]
    pub fn at_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(idx)
    }

    /// Returns the subspan selected by `bounds`, or `None` if it does not fit.
    #[inline]
    pub fn at_bounds(&mut self, bounds: impl Into<Bounds>) -> Option<SpanMut<'_, T>> {
        let r = bounds.into().try_to_range(self.len)?;
        Some(SpanMut::new(&mut self.as_mut_slice()[r]))
    }

    /// Returns the subspan selected by `bounds`.
    ///
    /// # Panics
    ///
    /// Panics with a bounds-check diagnostic if the range does not fit.
    #[inline]
    #[track_caller]
    pub fn slice(&mut self, bounds: impl Into<Bounds>) -> SpanMut<'_, T> {
        let r = bounds.into().to_range(self.len);
        SpanMut::new(&mut self.as_mut_slice()[r])
    }

    /// Returns the element at `idx` without a bounds check.
    ///
    /// # Safety
    ///
    /// `idx < self.len()`.
    #[inline]
    pub unsafe fn at_unchecked(&mut self, idx: usize) -> &mut T {
        debug_assert!(idx < self.len);
        self.data.add(idx).as_mut()
    }

    /// Returns the subspan selected by `bounds` without a bounds check.
    ///
    /// # Safety
    ///
    /// `bounds` must fit in `[0, len)`.
    #[inline]
    pub unsafe fn at_bounds_unchecked(&mut self, bounds: impl Into<Bounds>) -> SpanMut<'_, T> {
        let r = bounds.into().to_range_unchecked(self.len);
        SpanMut::from_raw_parts(self.data.add(r.start), r.len())
    }

    /// Splits into `[0, idx)` and `[idx, len)`, or `None` if `idx > len`.
    #[inline]
    pub fn split_at(self, idx: usize) -> Option<(SpanMut<'a, T>, SpanMut<'a, T>)> {
        let (a, b) = self.into_slice().split_at_mut_checked(idx)?;
        Some((SpanMut::new(a), SpanMut::new(b)))
    }
}

impl<'a, T> SpanMut<'a, T> {
    /// Views `slice` exclusively.
    #[inline]
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            len: slice.len(),
            data: Ptr::from_non_null(slice_base_mut(slice)),
            _marker: PhantomData,
        }
    }

    /// Views `len` slots starting at `data`.
    ///
    /// # Safety
    ///
    /// `data` must be valid for reads and writes of `len` aligned `T`s for
    /// `'a`, with no other access in that time. Before calling any safe
    /// method, all `len` slots must be live.
    #[inline]
    pub unsafe fn from_raw_parts(data: Ptr<T>, len: usize) -> Self {
        Self {
            data,
            len,
            _marker: PhantomData,
        }
    }

    /// An empty span.
    #[inline]
    pub fn empty() -> Self {
        Self {
            data: Ptr::dangling(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Splits off the first `n` elements and returns them; `self` keeps the
    /// rest.
    ///
    /// If `n > len`, returns `None` and leaves `self` unchanged.
    pub fn take_first(&mut self, n: usize) -> Option<SpanMut<'a, T>> {
        if n > self.len {
            return None;
        }
        let this = core::mem::replace(self, Self::empty());
        let (head, rest) = this.split_at(n)?;
        *self = rest;
        Some(head)
    }

    /// Splits off the last `n` elements and returns them; `self` keeps the
    /// rest.
    ///
    /// If `n > len`, returns `None` and leaves `self` unchanged.
    pub fn take_last(&mut self, n: usize) -> Option<SpanMut<'a, T>> {
        let idx = self.len.checked_sub(n)?;
        let this = core::mem::replace(self, Self::empty());
        let (rest, tail) = this.split_at(idx)?;
        *self = rest;
        Some(tail)
    }
}

impl<'a, T> Default for SpanMut<'a, T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T, const N: usize> Deref for SpanMut<'a, T, N> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<'a, T, const N: usize> DerefMut for SpanMut<'a, T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<'a, T, const N: usize> AsRef<[T]> for SpanMut<'a, T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<'a, T, const N: usize> AsMut<[T]> for SpanMut<'a, T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T> From<&'a mut [T]> for SpanMut<'a, T> {
    #[inline]
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}
impl<'a, T, const N: usize> From<&'a mut [T; N]> for SpanMut<'a, T, N> {
    #[inline]
    fn from(array: &'a mut [T; N]) -> Self {
        Self::with_extent(array)
    }
}

impl<'a, T, const N: usize> IntoIterator for SpanMut<'a, T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for SpanMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// SAFETY: `SpanMut` behaves like `&mut [T]`.
unsafe impl<T: Send, const N: usize> Send for SpanMut<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for SpanMut<'_, T, N> {}

#[cfg(test)]
mod tests {
    // Imports
    use super::{Span, SpanMut, DYN};
    use crate::{Bounds, Error};
    use alloc::vec::Vec;

    static_assertions::assert_impl_all!(Span<'static, u8>: Copy, Send, Sync);
    static_assertions::assert_impl_all!(SpanMut<'static, u8>: Send, Sync);
    static_assertions::assert_not_impl_any!(SpanMut<'static, u8>: Clone);
    static_assertions::assert_eq_size!(Span<'static, u64>, &'static [u64]);

    #[test]
    fn test_at_and_index() {
        let data = [10, 20, 30];
        let s = Span::new(&data[..]);
        assert_eq!(s.at(0), Some(&10));
        assert_eq!(s.at(5), None);
        assert_eq!(s[2], 30);
        assert_eq!(unsafe { *s.at_unchecked(1) }, 20);
        assert_eq!(s.len(), 3);
        assert_eq!(s.size(), 3);
        assert!(!s.is_empty());
        assert!(Span::<u8>::empty().is_empty());
    }

    #[test]
    #[should_panic(expected = "bounds-check failed: 5 (index) >= 3 (len)")]
    fn test_index_crashes() {
        let data = [1, 2, 3];
        let s = Span::new(&data[..]);
        let _ = s[5];
    }

    #[test]
    fn test_bounds_access() {
        let data = [0, 1, 2, 3, 4, 5];
        let s = Span::new(&data[..]);
        assert_eq!(s.at_bounds(2..4).unwrap(), [2, 3]);
        assert_eq!(s.at_bounds(Bounds::new().start(4).count(2)).unwrap(), [4, 5]);
        assert!(s.at_bounds(4..9).is_none());
        assert_eq!(s.slice(..=1), [0, 1]);
        assert_eq!(&s[Bounds::new().start(5)], &[5]);
    }

    #[test]
    #[should_panic(expected = "bounds-check failed")]
    fn test_slice_crashes() {
        let data = [0, 1, 2];
        Span::new(&data[..]).slice(2..1);
    }

    #[test]
    fn test_static_extent() {
        let data = [1, 2, 3, 4];
        let s: Span<'_, i32, 4> = Span::with_extent(&data[..]);
        assert!(Span::<i32, 4>::IS_STATIC);
        assert!(!Span::<i32, DYN>::IS_STATIC);
        assert_eq!(s.as_dynamic().len(), 4);
        assert_eq!(
            Span::<i32, 3>::try_with_extent(&data[..]).err(),
            Some(Error::ExtentMismatch {
                expected: 3,
                actual: 4
            })
        );
        let dynamic = Span::new(&data[1..]);
        assert!(dynamic.try_fixed::<3>().is_ok());
        assert!(dynamic.try_fixed::<2>().is_err());
        let from_array: Span<'_, i32, 4> = Span::from(&data);
        assert_eq!(from_array, data);
    }

    #[test]
    #[should_panic(expected = "extent mismatch: expected 2 elements, got 4")]
    fn test_static_extent_crashes() {
        let data = [1, 2, 3, 4];
        let _: Span<'_, i32, 2> = Span::with_extent(&data[..]);
    }

    #[test]
    fn test_split_join_roundtrip() {
        let data: Vec<u32> = (0..9).collect();
        let s = Span::new(&data[..]);
        for i in 0..=s.len() {
            let (prefix, suffix) = s.split_at(i).unwrap();
            assert_eq!(prefix.len(), i);
            assert_eq!(suffix.len(), s.len() - i);
            let joined: Vec<u32> = prefix.iter().chain(suffix.iter()).copied().collect();
            assert_eq!(joined, data);
        }
        assert!(s.split_at(10).is_none());
    }

    #[test]
    fn test_split_first_last() {
        let data = [1, 2, 3, 4, 5];
        let s = Span::new(&data[..]);
        let (head, rest) = s.split_first(2).unwrap();
        assert_eq!((head, rest), (Span::new(&[1, 2][..]), Span::new(&[3, 4, 5][..])));
        let (rest, tail) = s.split_last(1).unwrap();
        assert_eq!(rest, [1, 2, 3, 4]);
        assert_eq!(tail, [5]);
        assert!(s.split_first(6).is_none());
        assert!(s.split_last(6).is_none());
        assert_eq!(s.first(), Some(&1));
        assert_eq!(s.last(), Some(&5));

        let (arr, rest) = s.split_first_array::<3>().unwrap();
        assert_eq!(arr, &[1, 2, 3]);
        assert_eq!(rest, [4, 5]);
        let (rest, arr) = s.split_last_array::<2>().unwrap();
        assert_eq!(rest, [1, 2, 3]);
        assert_eq!(arr, &[4, 5]);
        assert!(s.split_first_array::<6>().is_none());
    }

    #[test]
    fn test_take_first_last() {
        let data = [1, 2, 3, 4, 5];
        let mut s = Span::new(&data[..]);
        assert_eq!(s.take_first(2).unwrap(), [1, 2]);
        assert_eq!(s, [3, 4, 5]);
        assert_eq!(s.take_last(1).unwrap(), [5]);
        assert_eq!(s, [3, 4]);
        assert!(s.take_first(3).is_none());
        assert!(s.take_last(3).is_none());
        assert_eq!(s, [3, 4]);
    }

    #[test]
    fn test_span_mut_basics() {
        let mut data = [1, 2, 3, 4];
        let mut s = SpanMut::new(&mut data[..]);
        *s.at_mut(1).unwrap() = 20;
        s.slice(2..)[0] = 30;
        assert!(s.at_bounds(3..5).is_none());
        unsafe { *s.at_unchecked(3) = 40 };
        assert_eq!(s.as_span(), [1, 20, 30, 40]);
        s[0] = 10;
        let mut rest = s;
        let head = rest.take_first(1).unwrap();
        assert_eq!(head.as_slice(), &[10]);
        let tail = rest.take_last(2).unwrap();
        assert_eq!(tail.as_slice(), &[30, 40]);
        assert!(rest.take_last(3).is_none());
        assert_eq!(rest.as_slice(), &[20]);
        assert_eq!(data, [10, 20, 30, 40]);
    }

    #[test]
    fn test_span_mut_writes_reach_source() {
        let mut data = [1, 2, 3];
        let mut s = SpanMut::new(&mut data[..]);
        s[0] = 9;
        s.as_mut_slice()[1] = 8;
        s.slice(2..)[0] = 7;
        assert_eq!(s.as_slice(), &[9, 8, 7]);
        let fixed = SpanMut::<i32, 3>::with_extent(&mut data[..]);
        fixed.into_slice()[2] = 6;
        assert_eq!(data, [9, 8, 6]);
    }

    #[test]
    fn test_at_bounds_unchecked() {
        let data = [1, 2, 3, 4, 5];
        let s = Span::new(&data[..]);
        let mid = unsafe { s.at_bounds_unchecked(Bounds::new().start(1).count(3)) };
        assert_eq!(mid.as_slice(), &[2, 3, 4]);
        assert_eq!(unsafe { s.at_bounds_unchecked(3..=4) }.as_slice(), &[4, 5]);
        assert!(unsafe { s.at_bounds_unchecked(5..) }.is_empty());

        let mut buf = [0u8; 4];
        let mut m = SpanMut::new(&mut buf[..]);
        unsafe { m.at_bounds_unchecked(2..) }.as_mut_slice().fill(1);
        assert_eq!(buf, [0, 0, 1, 1]);
    }

    #[test]
    fn test_span_mut_split_at() {
        let mut data = [1, 2, 3];
        let s = SpanMut::new(&mut data[..]);
        let (mut a, mut b) = s.split_at(1).unwrap();
        a[0] = 7;
        b[1] = 9;
        assert_eq!(data, [7, 2, 9]);
    }
}

// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `SpillVec` type and its inherent API.
//!
//! `SpillVec<T, N, A>` is a growable vector that keeps up to `N` elements
//! inline, inside the value itself, and moves them to a heap buffer obtained
//! from the allocator `A` once it needs more room ("spilling").
//!
//! The operations live one concern per file under `vec/`; this file holds
//! the representation and the queries everything else is built on.

mod assign;
mod drain;
mod extend;
mod insert;
mod new;
mod remove;
mod reserve;
mod resize;
mod retain;
mod splice;
mod split_off;

pub use drain::Drain;

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    bounds::Bounds,
    error::{crash, Error},
    ptr::Ptr,
    span::{Span, SpanMut},
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::{ManuallyDrop, MaybeUninit},
    ops::{Deref, DerefMut},
    ptr::NonNull,
    slice,
};

/// Storage shared by both modes. Which field is active is recorded in the
/// sign of [`SpillVec::tag`].
pub(crate) union Repr<T, const N: usize> {
    pub(crate) inline: ManuallyDrop<[MaybeUninit<T>; N]>,
    pub(crate) heap: (Ptr<T>, usize),
}

/// A growable vector with inline storage for up to `N` elements.
///
/// `SpillVec<T, N, A>` starts out *inlined*: its elements live in a buffer
/// inside the value, so small vectors never allocate. When an operation needs
/// more than `N` slots the vector *spills*: it moves its elements to a heap
/// buffer from `A` and stays there, growing by powers of two, until it is
/// cleared, dropped, or shrunk back below `N`.
///
/// # Layout and invariants
///
/// - `repr` is a union of the inline buffer and a `(pointer, capacity)` pair.
/// - `tag` holds `len` when inlined and `!len` when on the heap, so the
///   mode is the sign of `tag` read as an `isize`.
/// - Slots `[0, len)` are live; `[len, capacity)` are dead.
/// - `len <= capacity`, and heap capacities are powers of two unless an
///   exact size was requested.
///
/// # Failure modes
///
/// Precondition violations (out-of-range indices, bad bounds, lengths past
/// capacity) panic with a diagnostic. Checked alternatives return `Option`
/// or `Result`: [`at`](SpillVec::at), [`pop`](SpillVec::pop),
/// [`try_insert`](SpillVec::try_insert), [`try_remove`](SpillVec::try_remove),
/// [`try_reserve`](SpillVec::try_reserve).
///
/// # Examples
///
/// ```rust
/// use spill_vec::SpillVec;
///
/// let mut v: SpillVec<i32, 4> = SpillVec::from([1, 2, 3]);
/// v.insert(1, 99);
/// assert_eq!(v, [1, 99, 2, 3]);
/// assert!(v.is_inlined());
///
/// v.push(4);
/// assert!(v.is_on_heap());
/// assert_eq!(v.remove(0), 1);
/// v.erase(0..2);
/// assert_eq!(v, [3, 4]);
/// ```
pub struct SpillVec<T, const N: usize, A: Allocator = Global> {
    pub(crate) repr: Repr<T, N>,
    pub(crate) tag: usize,
    pub(crate) alloc: A,
    _marker: PhantomData<T>,
}

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// The number of elements stored inline.
    pub const INLINE_CAPACITY: usize = N;

    /// The smallest heap capacity used when a vector spills without a size
    /// hint.
    pub const MIN_HEAP_CAPACITY: usize = 32;

    #[inline]
    pub(crate) const fn from_parts(alloc: A) -> Self {
        Self {
            repr: Repr {
                inline: ManuallyDrop::new([const { MaybeUninit::uninit() }; N]),
            },
            tag: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    // Mode and size

    /// Returns `true` if the elements live in a heap buffer.
    #[inline]
    pub const fn is_on_heap(&self) -> bool {
        (self.tag as isize) < 0
    }

    /// Returns `true` if the elements live inside the vector itself.
    #[inline]
    pub const fn is_inlined(&self) -> bool {
        !self.is_on_heap()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        if self.is_on_heap() {
            !self.tag
        } else {
            self.tag
        }
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the vector can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        match self.heap() {
            Some((_, cap)) => cap,
            None => N,
        }
    }

    /// Returns the allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    pub(crate) fn heap(&self) -> Option<(Ptr<T>, usize)> {
        // SAFETY: a negative tag means `heap` is the active field.
        self.is_on_heap().then(|| unsafe { self.repr.heap })
    }

    /// Records a new length without touching any element.
    ///
    /// # Safety
    ///
    /// `len <= capacity()`, and the slots `[0, len)` must be live.
    #[inline]
    pub(crate) unsafe fn set_len_raw(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.tag = if self.is_on_heap() { !len } else { len };
    }

    /// Sets the length.
    ///
    /// # Safety
    ///
    /// Slots `[0, new_len)` must be live; growing requires the new slots to
    /// have been initialized, and shrinking leaks the cut-off elements unless
    /// they were destroyed.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > capacity()`.
    #[inline]
    #[track_caller]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        let capacity = self.capacity();
        if new_len > capacity {
            crash(Error::LenPastCapacity {
                len: new_len,
                capacity,
            });
        }
        self.set_len_raw(new_len);
    }

    // Data access

    /// Returns a pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match self.heap() {
            Some((p, _)) => p.raw(),
            // SAFETY: a non-negative tag means `inline` is the active field.
            None => unsafe { self.repr.inline.as_ptr().cast::<T>() },
        }
    }

    /// Returns a mutable pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data().raw()
    }

    /// The first slot as a [`Ptr`].
    #[inline]
    pub(crate) fn data(&mut self) -> Ptr<T> {
        match self.heap() {
            Some((p, _)) => p,
            // SAFETY: a non-negative tag means `inline` is the active field.
            None => unsafe {
                Ptr::from_non_null(NonNull::from(&mut *self.repr.inline).cast::<T>())
            },
        }
    }

    /// An exclusive view over the whole capacity, live or not.
    ///
    /// # Safety
    ///
    /// Only the `unsafe` relocation methods of [`SpanMut`] may be used on the
    /// result while any of its slots are dead.
    #[inline]
    pub(crate) unsafe fn spare_span(&mut self) -> SpanMut<'_, T> {
        let cap = self.capacity();
        SpanMut::from_raw_parts(self.data(), cap)
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is live.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        // SAFETY: `[0, len)` is live and `self` is borrowed exclusively.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Returns a span over the live elements.
    ///
    /// The span borrows the vector, so nothing can reallocate or shift the
    /// elements while it is alive.
    #[inline]
    pub fn as_span(&self) -> Span<'_, T> {
        Span::new(self.as_slice())
    }

    /// Returns an exclusive span over the live elements.
    #[inline]
    pub fn as_span_mut(&mut self) -> SpanMut<'_, T> {
        SpanMut::new(self.as_mut_slice())
    }

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

    /// Returns the span selected by `bounds`, or `None` if it does not fit.
    #[inline]
    pub fn at_bounds(&self, bounds: impl Into<Bounds>) -> Option<Span<'_, T>> {
        self.as_span().at_bounds(bounds)
    }

    /// Returns the exclusive span selected by `bounds`, or `None` if it does
    /// not fit.
    #[inline]
    pub fn at_bounds_mut(&mut self, bounds: impl Into<Bounds>) -> Option<SpanMut<'_, T>> {
        let r = bounds.into().try_to_range(self.len())?;
        Some(SpanMut::new(&mut self.as_mut_slice()[r]))
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize, A: Allocator> Drop for SpillVec<T, N, A> {
    fn drop(&mut self) {
        let len = self.len();
        // SAFETY: `[0, len)` is live; the length is cleared first so a
        // panicking destructor cannot cause a second drop.
        unsafe {
            self.set_len_raw(0);
            self.data().destroy_n(len);
            self.free_heap();
        }
    }
}

impl<T: fmt::Debug, const N: usize, A: Allocator> fmt::Debug for SpillVec<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// Comparisons are lexicographic over the live elements.
impl<T, U, const N: usize, const M: usize, A: Allocator, B: Allocator>
    PartialEq<SpillVec<U, M, B>> for SpillVec<T, N, A>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &SpillVec<U, M, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T, U, const N: usize, A: Allocator> PartialEq<[U]> for SpillVec<T, N, A>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize, A: Allocator> PartialEq<&[U]> for SpillVec<T, N, A>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T, U, const N: usize, const K: usize, A: Allocator> PartialEq<[U; K]> for SpillVec<T, N, A>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; K]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize, A: Allocator> PartialEq<alloc::vec::Vec<U>> for SpillVec<T, N, A>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &alloc::vec::Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<'s, T, U, const N: usize, const M: usize, A: Allocator> PartialEq<Span<'s, U, M>>
    for SpillVec<T, N, A>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Span<'s, U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize, A: Allocator> Eq for SpillVec<T, N, A> {}

impl<T: PartialOrd, const N: usize, const M: usize, A: Allocator, B: Allocator>
    PartialOrd<SpillVec<T, M, B>> for SpillVec<T, N, A>
{
    #[inline]
    fn partial_cmp(&self, other: &SpillVec<T, M, B>) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord, const N: usize, A: Allocator> Ord for SpillVec<T, N, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize, A: Allocator> Hash for SpillVec<T, N, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize, A: Allocator> Deref for SpillVec<T, N, A> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize, A: Allocator> DerefMut for SpillVec<T, N, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize, A: Allocator> AsRef<[T]> for SpillVec<T, N, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize, A: Allocator> AsMut<[T]> for SpillVec<T, N, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T, const N: usize, A: Allocator> Borrow<[T]> for SpillVec<T, N, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize, A: Allocator> BorrowMut<[T]> for SpillVec<T, N, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// SAFETY: `SpillVec` owns its elements like `Vec<T>` does; the raw pointer
// in the heap representation is never shared.
unsafe impl<T: Send, const N: usize, A: Allocator + Send> Send for SpillVec<T, N, A> {}
unsafe impl<T: Sync, const N: usize, A: Allocator + Sync> Sync for SpillVec<T, N, A> {}

#[cfg(test)]
mod tests {
    // Imports
    use super::SpillVec;
    use crate::{testing::Tracked, Global, Span};
    use alloc::{collections::BTreeSet, rc::Rc, vec::Vec};
    use core::cell::Cell;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    static_assertions::assert_impl_all!(SpillVec<u8, 4>: Send, Sync);
    static_assertions::assert_impl_all!(SpillVec<alloc::string::String, 4, Global>: Send, Sync);
    static_assertions::assert_not_impl_any!(SpillVec<Rc<u8>, 4>: Send, Sync);
    static_assertions::assert_eq_size!(SpillVec<usize, 2>, [usize; 3]);

    #[test]
    fn test_new_is_inlined_and_empty() {
        let v: SpillVec<u32, 8> = SpillVec::new();
        assert!(v.is_inlined());
        assert!(!v.is_on_heap());
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.allocator(), &Global);
    }

    #[test]
    fn test_tag_sign_encodes_mode() {
        let mut v: SpillVec<u32, 2> = SpillVec::from([1, 2]);
        assert_eq!(v.tag, 2);
        v.push(3);
        assert!((v.tag as isize) < 0);
        assert_eq!(!v.tag, 3);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_concrete_scenario() {
        let mut v: SpillVec<i32, 4> = SpillVec::from([1, 2, 3]);
        v.insert(1, 99);
        assert_eq!(v, [1, 99, 2, 3]);
        assert_eq!(v.remove(0), 1);
        assert_eq!(v, [99, 2, 3]);
        v.erase(0..2);
        assert_eq!(v, [3]);
    }

    #[test]
    fn test_accessors() {
        let mut v: SpillVec<i32, 2> = SpillVec::from([5, 6, 7]);
        assert_eq!(v.at(2), Some(&7));
        assert_eq!(v.at(3), None);
        *v.at_mut(0).unwrap() = 50;
        assert_eq!(v[0], 50);
        assert_eq!(v.at_bounds(1..).unwrap(), [6, 7]);
        assert!(v.at_bounds(2..4).is_none());
        v.at_bounds_mut(..2).unwrap().reverse();
        assert_eq!(v, [6, 50, 7]);
        assert_eq!(v.as_span(), Span::new(&[6, 50, 7][..]));
        v.as_span_mut().sort();
        assert_eq!(v.as_slice(), &[6, 7, 50]);
        assert_eq!(v.iter().sum::<i32>(), 63);
        for x in v.iter_mut() {
            *x += 1;
        }
        assert_eq!(v, alloc::vec![7, 8, 51]);
    }

    #[test]
    #[should_panic(expected = "bounds-check failed: 3 (index) >= 3 (len)")]
    fn test_index_out_of_bounds_crashes() {
        let v: SpillVec<i32, 4> = SpillVec::from([1, 2, 3]);
        let _ = v[3];
    }

    #[test]
    #[should_panic(expected = "length 5 exceeds capacity 4")]
    fn test_set_len_past_capacity_crashes() {
        let mut v: SpillVec<u8, 4> = SpillVec::new();
        unsafe { v.set_len(5) };
    }

    #[test]
    fn test_comparisons() {
        let a: SpillVec<i32, 2> = SpillVec::from([1, 2, 3]);
        let b: SpillVec<i32, 8> = SpillVec::from([1, 2, 3]);
        let c: SpillVec<i32, 8> = SpillVec::from([1, 2, 4]);
        assert_eq!(a, b);
        assert!(b < c);
        assert_eq!(c.cmp(&b), core::cmp::Ordering::Greater);
        let set: BTreeSet<SpillVec<i32, 8>> = [c.clone(), b.clone()].into_iter().collect();
        assert_eq!(set.first(), Some(&b));
        assert_eq!(alloc::format!("{a:?}"), "[1, 2, 3]");
    }

    #[test]
    fn test_drop_destroys_each_element_once() {
        let drops = Cell::new(0);
        {
            let mut v: SpillVec<Tracked<'_>, 2> = SpillVec::new();
            for i in 0..5 {
                v.push(Tracked::new(i, &drops));
            }
            assert!(v.is_on_heap());
        }
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_push_pop_inverse() {
        let mut v: SpillVec<u32, 3> = SpillVec::from([1, 2, 3]);
        let before: Vec<u32> = v.to_vec();
        v.push(42);
        assert_eq!(v.pop(), Some(42));
        assert_eq!(v, before);
    }

    /// Random pushes, pops, inserts and removes, checked against `Vec`.
    #[test]
    fn test_random_ops_match_vec_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let mut v: SpillVec<u64, 4> = SpillVec::new();
            let mut model: Vec<u64> = Vec::new();
            for _ in 0..200 {
                match rng.gen_range(0..5) {
                    0 | 1 => {
                        let x = rng.gen();
                        v.push(x);
                        model.push(x);
                    }
                    2 => assert_eq!(v.pop(), model.pop()),
                    3 => {
                        let idx = rng.gen_range(0..=model.len());
                        let x = rng.gen();
                        v.insert(idx, x);
                        model.insert(idx, x);
                    }
                    _ => {
                        if !model.is_empty() {
                            let idx = rng.gen_range(0..model.len());
                            assert_eq!(v.remove(idx), model.remove(idx));
                        }
                    }
                }
                assert_eq!(v.len(), model.len());
                assert_eq!(v.as_span(), model.as_slice());
                assert!(v.len() <= v.capacity());
            }
        }
    }
}

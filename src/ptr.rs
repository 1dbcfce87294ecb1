// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed object pointers and the lifetime primitives built on them.
//!
//! [`Ptr<T>`] is a non-null `*mut T` that knows how to start and end the life
//! of the `T` it points at: construct into a dead slot, destroy a live one,
//! relocate from one slot to another, assign over a live slot. Containers use
//! these instead of touching raw pointers directly, so every place that
//! creates or ends an element's life is spelled out.
//!
//! Terminology used throughout:
//!
//! - a **live** slot holds an initialized `T` that someone must eventually drop;
//! - a **dead** slot holds no value (uninitialized, or moved out of).
//!
//! All lifetime operations are `unsafe`: the caller vouches for the live/dead
//! state of each slot involved.

// Crate imports
use crate::traits::Traits;

// Core imports
use core::{cmp::Ordering, fmt, hash, ptr, ptr::NonNull};

/// A non-null pointer to a (possibly dead) `T`.
#[repr(transparent)]
pub struct Ptr<T>(NonNull<T>);

impl<T> Ptr<T> {
    /// A well-aligned dangling pointer. Never valid to read, but valid as the
    /// base of an empty range or for any zero-sized `T`.
    #[inline]
    pub const fn dangling() -> Self {
        Self(NonNull::dangling())
    }

    /// Wraps a raw pointer, returning `None` if it is null.
    #[inline]
    pub fn new(raw: *mut T) -> Option<Self> {
        NonNull::new(raw).map(Self)
    }

    /// Wraps a non-null pointer.
    #[inline]
    pub const fn from_non_null(p: NonNull<T>) -> Self {
        Self(p)
    }

    /// Points at a shared reference's target.
    ///
    /// Writing through the result is undefined behavior.
    #[inline]
    pub fn from_ref(r: &T) -> Self {
        Self(NonNull::from(r))
    }

    /// Points at an exclusive reference's target.
    #[inline]
    pub fn from_mut(r: &mut T) -> Self {
        Self(NonNull::from(r))
    }

    /// The underlying raw pointer.
    #[inline]
    pub const fn raw(self) -> *mut T {
        self.0.as_ptr()
    }

    /// The underlying non-null pointer.
    #[inline]
    pub const fn as_non_null(self) -> NonNull<T> {
        self.0
    }

    /// The address, for diagnostics and overlap tests.
    #[inline]
    pub fn addr(self) -> usize {
        self.raw() as usize
    }

    /// Offsets by `n` elements.
    ///
    /// # Safety
    ///
    /// The result must stay within (or one past) the same allocation.
    #[inline]
    pub unsafe fn add(self, n: usize) -> Self {
        Self(self.0.add(n))
    }

    /// The distance from `origin` to `self`, in elements.
    ///
    /// # Safety
    ///
    /// Both pointers must lie within the same allocation, and `T` must not be
    /// zero-sized.
    #[inline]
    pub unsafe fn offset_from(self, origin: Self) -> isize {
        self.0.offset_from(origin.0)
    }

    /// Borrows the target.
    ///
    /// # Safety
    ///
    /// The slot must be live for `'a` and not mutated through another pointer.
    #[inline]
    pub unsafe fn as_ref<'a>(self) -> &'a T {
        self.0.as_ref()
    }

    /// Borrows the target exclusively.
    ///
    /// # Safety
    ///
    /// The slot must be live for `'a` and not accessed through another pointer.
    #[inline]
    pub unsafe fn as_mut<'a>(mut self) -> &'a mut T {
        self.0.as_mut()
    }

    // Single-object lifetime primitives

    /// Constructs `value` in a dead slot, making it live.
    ///
    /// # Safety
    ///
    /// The slot must be valid for writes and dead; a live value there would
    /// be leaked.
    #[inline]
    pub unsafe fn construct(self, value: T) {
        self.0.write(value);
    }

    /// Destroys a live slot, making it dead.
    ///
    /// # Safety
    ///
    /// The slot must be live, and must not be used as live afterwards.
    #[inline]
    pub unsafe fn destroy(self) {
        if !Traits::<T>::TRIVIALLY_DESTRUCTIBLE {
            ptr::drop_in_place(self.raw());
        }
    }

    /// Moves the value out of a live slot, leaving it dead.
    ///
    /// # Safety
    ///
    /// The slot must be live.
    #[inline]
    pub unsafe fn read(self) -> T {
        self.0.read()
    }

    /// Relocates a live `src` into this dead slot. `src` ends up dead.
    ///
    /// # Safety
    ///
    /// `self` must be dead, `src` live, and the two must not overlap.
    #[inline]
    pub unsafe fn relocate_from(self, src: Self) {
        self.construct(src.read());
    }

    /// Move-assigns a live `src` over this live slot. The old value is
    /// dropped and `src` ends up dead.
    ///
    /// # Safety
    ///
    /// Both slots must be live and distinct.
    #[inline]
    pub unsafe fn move_from(self, src: Self) {
        *self.as_mut() = src.read();
    }

    /// Copy-assigns `src` over this live slot with [`Clone::clone_from`].
    ///
    /// # Safety
    ///
    /// Both slots must be live and distinct.
    #[inline]
    pub unsafe fn copy_from(self, src: Self)
    where
        T: Clone,
    {
        self.as_mut().clone_from(src.as_ref());
    }

    /// Constructs a clone of live `src` in this dead slot.
    ///
    /// # Safety
    ///
    /// `self` must be dead and `src` live.
    #[inline]
    pub unsafe fn emplace_clone(self, src: Self)
    where
        T: Clone,
    {
        self.construct(src.as_ref().clone());
    }

    // Bulk primitives

    /// Destroys `n` consecutive live slots.
    ///
    /// # Safety
    ///
    /// All `n` slots must be live.
    #[inline]
    pub unsafe fn destroy_n(self, n: usize) {
        if !Traits::<T>::TRIVIALLY_DESTRUCTIBLE {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.raw(), n));
        }
    }

    /// Relocates `n` live slots from `src` into `n` dead slots at `self`.
    ///
    /// # Safety
    ///
    /// The ranges must not overlap; `src` must be live and `self` dead.
    #[inline]
    pub unsafe fn relocate_n(self, src: Self, n: usize) {
        if Traits::<T>::TRIVIALLY_RELOCATABLE {
            ptr::copy_nonoverlapping(src.raw(), self.raw(), n);
        } else {
            for i in 0..n {
                self.add(i).relocate_from(src.add(i));
            }
        }
    }

    /// Byte-copies `n` values from `src` into `self`.
    ///
    /// # Safety
    ///
    /// The ranges must not overlap and `src` must be live.
    #[inline]
    pub unsafe fn copy_n(self, src: Self, n: usize)
    where
        T: Copy,
    {
        ptr::copy_nonoverlapping(src.raw(), self.raw(), n);
    }

    /// Copy-assigns `n` live values from `src` over `n` live slots.
    ///
    /// # Safety
    ///
    /// The ranges must not overlap and both must be live.
    #[inline]
    pub unsafe fn copy_assign_n(self, src: Self, n: usize)
    where
        T: Clone,
    {
        for i in 0..n {
            self.add(i).copy_from(src.add(i));
        }
    }

    /// Constructs clones of `n` live values from `src` into `n` dead slots.
    ///
    /// If a clone panics, the clones already made are leaked, never dropped
    /// twice.
    ///
    /// # Safety
    ///
    /// The ranges must not overlap; `src` must be live and `self` dead.
    #[inline]
    pub unsafe fn emplace_clone_n(self, src: Self, n: usize)
    where
        T: Clone,
    {
        for i in 0..n {
            self.add(i).emplace_clone(src.add(i));
        }
    }

    /// Relocates `count` live elements from `src` to `self`, where the two
    /// ranges may overlap.
    ///
    /// Afterwards the destination range is live and holds the source values
    /// in their original order. Every source slot not covered by the
    /// destination is dead and must not be dropped.
    ///
    /// Trivially relocatable types take a single `memmove`. Everything else
    /// goes element by element, in an order that reads each source slot
    /// before anything is written over it:
    ///
    /// - disjoint ranges: any order;
    /// - `self > src`: highest index first;
    /// - `self < src`: lowest index first.
    ///
    /// For an overlapping shift the destination splits into bands. Slots
    /// outside the old source range were dead and are plain constructs.
    /// Slots inside it held a source value that was already moved out, so
    /// they are written without dropping anything. The vacated head (or
    /// tail) of the source range is left dead.
    ///
    /// # Safety
    ///
    /// Both ranges must lie in one allocation. The source range must be
    /// live; destination slots outside the source range must be dead.
    pub unsafe fn relocate_overlapping(self, src: Self, count: usize) {
        if count == 0 || self == src {
            return;
        }
        if Traits::<T>::TRIVIALLY_RELOCATABLE {
            ptr::copy(src.raw(), self.raw(), count);
            return;
        }

        let (d, s) = (self.addr(), src.addr());
        let bytes = count * core::mem::size_of::<T>();
        if s + bytes <= d || d + bytes <= s {
            self.relocate_n(src, count);
        } else if d > s {
            for i in (0..count).rev() {
                self.add(i).construct(src.add(i).read());
            }
        } else {
            for i in 0..count {
                self.add(i).construct(src.add(i).read());
            }
        }
    }
}

impl<T> Clone for Ptr<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Ptr<T> {}

impl<T> PartialEq for Ptr<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<T> Eq for Ptr<T> {}
impl<T> PartialOrd for Ptr<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for Ptr<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
impl<T> hash::Hash for Ptr<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}
impl<T> fmt::Debug for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.0, f)
    }
}
impl<T> fmt::Pointer for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.0, f)
    }
}
impl<T> From<NonNull<T>> for Ptr<T> {
    #[inline]
    fn from(p: NonNull<T>) -> Self {
        Self(p)
    }
}

// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity management: spilling, growing, shrinking and releasing storage.

// Crate imports
use crate::{
    allocator::{try_array_layout, Allocator},
    error::{crash, Error},
    ptr::Ptr,
    traits::Traits,
    vec::SpillVec,
};

// Core imports
use core::{alloc::Layout, mem, ptr::NonNull};

// Alloc imports
use alloc::alloc::handle_alloc_error;

/// Unwraps the result of a fallible growth step for the infallible API.
///
/// Allocation failure goes to [`handle_alloc_error`]; anything else panics
/// with its diagnostic.
#[inline]
#[track_caller]
pub(crate) fn infallible<R>(res: Result<R, Error>) -> R {
    match res {
        Ok(v) => v,
        Err(Error::AllocFailed { size, align }) => match Layout::from_size_align(size, align) {
            Ok(layout) => handle_alloc_error(layout),
            Err(_) => crash(Error::CapacityOverflow),
        },
        Err(e) => crash(e),
    }
}

/// Heap requests are capped at `isize::MAX / 2` bytes, and lengths must keep
/// the tag's sign bit free.
#[inline]
fn check_request<T>(cap: usize) -> Result<(), Error> {
    let bytes = cap
        .checked_mul(mem::size_of::<T>())
        .ok_or(Error::CapacityOverflow)?;
    if bytes > usize::MAX / 2 || cap > isize::MAX as usize {
        return Err(Error::CapacityOverflow);
    }
    Ok(())
}

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Moves the elements to the heap, even if they would fit inline.
    ///
    /// The new capacity is the next power of two at or above the current
    /// capacity, and at least [`MIN_HEAP_CAPACITY`](Self::MIN_HEAP_CAPACITY)
    /// while the vector holds fewer elements than that. Does nothing if the
    /// vector is already on the heap.
    pub fn spill_to_heap(&mut self) {
        if self.is_on_heap() {
            return;
        }
        let cap = if self.len() < Self::MIN_HEAP_CAPACITY {
            Self::MIN_HEAP_CAPACITY
        } else {
            infallible(
                self.capacity()
                    .checked_next_power_of_two()
                    .ok_or(Error::CapacityOverflow),
            )
        };
        trace!(len = self.len(), cap, "spilling to heap");
        infallible(self.try_move_to_heap(cap));
    }

    /// Makes room for at least `extra` more elements.
    ///
    /// Capacity never shrinks. When growth is needed the new capacity is
    /// `len + extra` rounded up to a power of two.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the request is too large. Running
    /// out of memory ends in [`handle_alloc_error`].
    #[track_caller]
    pub fn reserve(&mut self, extra: usize) {
        infallible(self.try_reserve(extra));
    }

    /// Like [`reserve`](Self::reserve), but grows to exactly `len + extra`.
    #[track_caller]
    pub fn reserve_exact(&mut self, extra: usize) {
        infallible(self.grow_for(extra, true));
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocFailed`]; the
    /// vector is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spill_vec::{Error, SpillVec};
    ///
    /// let mut v: SpillVec<u64, 4> = SpillVec::new();
    /// assert!(v.try_reserve(10).is_ok());
    /// assert_eq!(v.capacity(), 16);
    /// assert_eq!(v.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
    /// ```
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), Error> {
        self.grow_for(extra, false)
    }

    fn grow_for(&mut self, extra: usize, exact: bool) -> Result<(), Error> {
        if extra == 0 {
            return Ok(());
        }
        let needed = self
            .len()
            .checked_add(extra)
            .ok_or(Error::CapacityOverflow)?;
        check_request::<T>(needed)?;
        if needed <= self.capacity() {
            return Ok(());
        }
        let cap = if exact {
            needed
        } else {
            needed
                .checked_next_power_of_two()
                .ok_or(Error::CapacityOverflow)?
        };
        self.try_move_to_heap(cap)
    }

    /// Points the vector at a heap buffer of exactly `cap` slots holding the
    /// current elements. Nothing changes on error.
    pub(crate) fn try_move_to_heap(&mut self, cap: usize) -> Result<(), Error> {
        let len = self.len();
        debug_assert!(cap >= len);
        check_request::<T>(cap)?;
        let new_layout = try_array_layout::<T>(cap)?;

        match self.heap() {
            Some((old, old_cap)) if Traits::<T>::TRIVIALLY_RELOCATABLE => {
                let old_layout = try_array_layout::<T>(old_cap)?;
                // SAFETY: `old` came from this allocator with `old_layout`,
                // and both layouts share `T`'s alignment.
                let grown = unsafe {
                    self.alloc
                        .try_reallocate(old.as_non_null().cast(), old_layout, new_layout)?
                };
                trace!(len, old_cap, cap, "reallocated heap buffer");
                self.repr.heap = (Ptr::from_non_null(grown.cast::<T>()), cap);
            }
            _ => {
                let fresh = Ptr::from_non_null(self.alloc.try_allocate(new_layout)?.cast::<T>());
                // SAFETY: the fresh block has room for `cap >= len` slots and
                // cannot overlap the old storage.
                unsafe {
                    fresh.relocate_n(self.data(), len);
                    self.free_heap();
                }
                trace!(len, cap, "relocated into new heap buffer");
                self.repr.heap = (fresh, cap);
                self.tag = !len;
            }
        }
        Ok(())
    }

    /// Frees the heap buffer, if any, and marks the vector inline and empty.
    ///
    /// # Safety
    ///
    /// Every element in the heap buffer must already be dead or relocated.
    pub(crate) unsafe fn free_heap(&mut self) {
        if let Some((p, cap)) = self.heap() {
            if let Ok(layout) = try_array_layout::<T>(cap) {
                self.alloc.deallocate(p.as_non_null().cast::<u8>(), layout);
            }
        }
        self.tag = 0;
    }

    /// Shrinks the capacity as far as possible.
    ///
    /// A heap vector whose elements fit inline moves back inline; otherwise
    /// the heap buffer shrinks to exactly `len`.
    pub fn shrink_to_fit(&mut self) {
        let Some((p, cap)) = self.heap() else {
            return;
        };
        let len = self.len();
        if len <= N {
            trace!(len, cap, "moving back inline");
            self.repr.inline = mem::ManuallyDrop::new([const { mem::MaybeUninit::uninit() }; N]);
            // SAFETY: `inline` is the field just written and has room for
            // `len` slots; `p` still holds the live elements.
            unsafe {
                let dst = Ptr::from_non_null(NonNull::from(&mut *self.repr.inline).cast::<T>());
                dst.relocate_n(p, len);
                if let Ok(layout) = try_array_layout::<T>(cap) {
                    self.alloc.deallocate(p.as_non_null().cast::<u8>(), layout);
                }
            }
            self.tag = len;
        } else if len < cap {
            trace!(len, cap, "shrinking heap buffer");
            infallible(self.try_move_to_heap(len));
        }
    }

    /// Destroys every element and releases any heap buffer, leaving the
    /// vector empty and inline.
    pub fn clear(&mut self) {
        self.truncate(0);
        // SAFETY: no element is live.
        unsafe { self.free_heap() };
    }

    /// Takes over the elements of `that`, which is left empty and inline.
    ///
    /// The previous contents of `self` are destroyed. A heap buffer is taken
    /// over without copying, and so is the allocator that owns it; `that`
    /// gets `self`'s old allocator in exchange. Inline elements are
    /// relocated, keeping `self`'s buffer when the allocators compare equal.
    pub fn move_from(&mut self, that: &mut Self) {
        if let Some((p, cap)) = that.heap() {
            self.clear();
            mem::swap(&mut self.alloc, &mut that.alloc);
            self.repr.heap = (p, cap);
            self.tag = that.tag;
            that.tag = 0;
            return;
        }

        let n = that.len();
        if self.alloc == that.alloc {
            self.truncate(0);
        } else {
            self.clear();
            mem::swap(&mut self.alloc, &mut that.alloc);
        }
        // SAFETY: `that` is inline so `n <= N <= capacity()`; the two buffers
        // are distinct objects. `that` forgets its elements before `self`
        // claims them.
        unsafe {
            that.set_len_raw(0);
            self.data().relocate_n(that.data(), n);
            self.set_len_raw(n);
        }
    }
}

// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The allocator capability.
//!
//! [`SpillVec`](crate::SpillVec) gets its heap memory through an
//! [`Allocator`]: allocate, reallocate, and deallocate raw blocks described by
//! a [`Layout`]. How the allocator manages memory is its own business.
//!
//! Running out of memory is fatal for the infallible methods: they end in
//! [`handle_alloc_error`]. The `try_*` methods report it as
//! [`Error::AllocFailed`] instead.

// Crate imports
use crate::error::{crash, Error};

// Core imports
use core::{alloc::Layout, ptr, ptr::NonNull};

// Alloc imports
use alloc::alloc::handle_alloc_error;

/// A source of raw memory blocks.
///
/// Allocators compare equal when memory from one may be freed by the other;
/// containers use this to decide whether they can take over each other's
/// buffers.
///
/// # Safety
///
/// Implementations must return blocks that fit the requested layout and stay
/// valid until passed to [`deallocate`](Allocator::deallocate) or
/// [`try_reallocate`](Allocator::try_reallocate) on an equal allocator.
pub unsafe trait Allocator: PartialEq {
    /// Allocates a block for `layout`.
    fn try_allocate(&self, layout: Layout) -> Result<NonNull<u8>, Error>;

    /// Resizes a block. On success the old block must no longer be used; on
    /// failure it is untouched.
    ///
    /// # Safety
    ///
    /// `ptr` must have been allocated by this allocator with layout `old`,
    /// and `new.align() == old.align()`.
    unsafe fn try_reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new: Layout,
    ) -> Result<NonNull<u8>, Error>;

    /// Frees a block.
    ///
    /// # Safety
    ///
    /// `ptr` must have been allocated by this allocator with `layout`.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Allocates a block for `layout`, aborting through
    /// [`handle_alloc_error`] on failure.
    #[inline]
    fn allocate(&self, layout: Layout) -> NonNull<u8> {
        match self.try_allocate(layout) {
            Ok(p) => p,
            Err(_) => handle_alloc_error(layout),
        }
    }

    /// Resizes a block, aborting through [`handle_alloc_error`] on failure.
    ///
    /// # Safety
    ///
    /// Same as [`try_reallocate`](Allocator::try_reallocate).
    #[inline]
    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: Layout, new: Layout) -> NonNull<u8> {
        match self.try_reallocate(ptr, old, new) {
            Ok(p) => p,
            Err(_) => handle_alloc_error(new),
        }
    }
}

/// The global heap from `alloc::alloc`.
///
/// Zero-size requests never reach the heap: they get an aligned dangling
/// pointer, and freeing one is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Global;

#[inline]
fn dangling_for(layout: Layout) -> Result<NonNull<u8>, Error> {
    NonNull::new(ptr::null_mut::<u8>().wrapping_add(layout.align())).ok_or(alloc_failed(layout))
}

#[inline]
fn alloc_failed(layout: Layout) -> Error {
    Error::AllocFailed {
        size: layout.size(),
        align: layout.align(),
    }
}

unsafe impl Allocator for Global {
    #[inline]
    fn try_allocate(&self, layout: Layout) -> Result<NonNull<u8>, Error> {
        if layout.size() == 0 {
            return dangling_for(layout);
        }
        // SAFETY: the layout has a non-zero size.
        NonNull::new(unsafe { alloc::alloc::alloc(layout) }).ok_or(alloc_failed(layout))
    }

    unsafe fn try_reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new: Layout,
    ) -> Result<NonNull<u8>, Error> {
        debug_assert_eq!(old.align(), new.align());
        if old.size() == 0 {
            return self.try_allocate(new);
        }
        if new.size() == 0 {
            self.deallocate(ptr, old);
            return dangling_for(new);
        }
        NonNull::new(alloc::alloc::realloc(ptr.as_ptr(), old, new.size())).ok_or(alloc_failed(new))
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            alloc::alloc::dealloc(ptr.as_ptr(), layout);
        }
    }
}

/// The layout of `[T; n]`, or [`Error::CapacityOverflow`] if it exceeds
/// `isize::MAX` bytes.
#[inline]
pub fn try_array_layout<T>(n: usize) -> Result<Layout, Error> {
    Layout::array::<T>(n).map_err(|_| Error::CapacityOverflow)
}

/// The layout of `[T; n]`.
///
/// # Panics
///
/// Panics with "capacity overflow" if the array exceeds `isize::MAX` bytes.
#[inline]
#[track_caller]
pub fn array_layout<T>(n: usize) -> Layout {
    match try_array_layout::<T>(n) {
        Ok(layout) => layout,
        Err(e) => crash(e),
    }
}

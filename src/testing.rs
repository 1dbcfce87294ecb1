// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for unit tests.

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    error::Error,
};

// Core imports
use core::{alloc::Layout, cell::Cell, fmt, ptr::NonNull};

// Alloc imports
use alloc::rc::Rc;

/// An element with drop glue that counts its drops, for exactly-once checks.
pub(crate) struct Tracked<'a> {
    pub value: i32,
    drops: &'a Cell<usize>,
}

impl<'a> Tracked<'a> {
    pub fn new(value: i32, drops: &'a Cell<usize>) -> Self {
        Self { value, drops }
    }
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        Self::new(self.value, self.drops)
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for Tracked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// Values of a slice of tracked elements.
pub(crate) fn values(items: &[Tracked<'_>]) -> alloc::vec::Vec<i32> {
    items.iter().map(|t| t.value).collect()
}

/// An allocator over the global heap with an identity and a count of live
/// blocks. Clones share the count; equality is by `id`.
#[derive(Clone, Debug)]
pub(crate) struct TestAlloc {
    pub id: u32,
    live: Rc<Cell<isize>>,
}

impl TestAlloc {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            live: Rc::new(Cell::new(0)),
        }
    }

    /// Blocks allocated and not yet freed.
    pub fn live(&self) -> isize {
        self.live.get()
    }
}

impl PartialEq for TestAlloc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

unsafe impl Allocator for TestAlloc {
    fn try_allocate(&self, layout: Layout) -> Result<NonNull<u8>, Error> {
        let p = Global.try_allocate(layout)?;
        if layout.size() != 0 {
            self.live.set(self.live.get() + 1);
        }
        Ok(p)
    }

    unsafe fn try_reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new: Layout,
    ) -> Result<NonNull<u8>, Error> {
        let p = Global.try_reallocate(ptr, old, new)?;
        let delta = (new.size() != 0) as isize - (old.size() != 0) as isize;
        self.live.set(self.live.get() + delta);
        Ok(p)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            self.live.set(self.live.get() - 1);
        }
        Global.deallocate(ptr, layout);
    }
}

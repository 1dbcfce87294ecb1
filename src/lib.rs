// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `spill-vec`
//!
//! A `no_std` growable vector with inline small-buffer storage, plus the
//! borrowed views and raw relocation primitives it is built from.
//!
//! The core type, [`SpillVec<T, N, A>`], stores up to `N` elements inline
//! inside the value and *spills* to a heap buffer from the allocator `A` once
//! it needs more. Which mode it is in is encoded in the sign bit of its
//! length word, so the vector costs one word plus the larger of its inline
//! buffer and a `(pointer, capacity)` pair.
//!
//! ## Building blocks
//!
//! - [`Bounds`]: a range description (`start`, one of `end` /
//!   `including_end` / `count`) that resolves against a length with a precise
//!   diagnostic when it does not fit. Every core range type converts into it.
//! - [`Span`] and [`SpanMut`]: shared and exclusive views of contiguous
//!   elements, with an optional static extent checked at construction.
//!   Searching, splitting, sorting and in-buffer relocation live here.
//! - [`Ptr`]: a non-null element pointer with object-lifetime primitives
//!   (construct, destroy, relocate, clone into dead storage) and the
//!   overlap-aware shift used to open and close gaps.
//! - [`Allocator`] and [`Global`]: where heap memory comes from.
//! - [`Traits`]: compile-time flags that pick byte-copy fast paths.
//!
//! ## Failure modes
//!
//! Violated preconditions (out-of-range indices, bad bounds, lengths past
//! capacity) panic with a diagnostic such as
//! `bounds-check failed: 5 (index) >= 3 (len)`. Each of those operations has
//! a checked form that returns `Option` or `Result<_, Error>` instead.
//! Running out of memory ends in [`alloc::alloc::handle_alloc_error`] unless
//! a `try_*` method was used.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for [`SpillVec`] (with
//!   `A: Default`) and `Serialize` for [`Span`].
//! - `tracing`: `trace!` events when storage moves between inline and heap,
//!   grows, or shrinks.
//!
//! ## Example
//!
//! ```rust
//! use spill_vec::{Bounds, SpillVec};
//!
//! let mut v: SpillVec<u32, 4> = SpillVec::new();
//! v.extend_from_slice(&[1, 2, 3]);
//! assert!(v.is_inlined());
//!
//! v.splice_within(0, 1..);
//! assert_eq!(v, [2, 3, 1, 2, 3]);
//! assert!(v.is_on_heap());
//!
//! let s = v.as_span();
//! assert_eq!(s.find(&3), Some(1));
//! assert_eq!(&s[Bounds::new().start(1).count(2)], &[3, 1]);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

// Modules
mod allocator;
mod bounds;
mod error;
mod index;
mod iter;
mod ptr;
#[cfg(feature = "serde")]
mod serde;
mod span;
#[cfg(test)]
mod testing;
mod traits;
mod vec;

// Public exports (crate API surface)
pub use allocator::{array_layout, try_array_layout, Allocator, Global};
pub use bounds::Bounds;
pub use error::Error;
pub use iter::IntoIter;
pub use ptr::Ptr;
pub use span::{Span, SpanMut, Split, DYN};
pub use traits::Traits;
pub use vec::{Drain, SpillVec};

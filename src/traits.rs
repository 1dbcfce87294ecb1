// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compile-time element capabilities.
//!
//! The relocation code picks between a raw byte copy and an element-wise loop
//! based on these flags. Every flag is a `const`, so the untaken branch folds
//! away at monomorphization.
//!
//! Trivial copyability is not a flag: the paths that depend on it take a
//! `T: Copy` bound instead.

// Core imports
use core::{marker::PhantomData, mem};

/// Capability flags for the element type `T`.
pub struct Traits<T>(PhantomData<T>);

impl<T> Traits<T> {
    /// Dropping a `T` does nothing.
    pub const TRIVIALLY_DESTRUCTIBLE: bool = !mem::needs_drop::<T>();

    /// A `T` may be moved with a byte copy and its old bytes forgotten.
    ///
    /// Every Rust move is a byte copy, but the crate treats types with drop
    /// glue as non-trivial so that their moves run through the element-wise
    /// path, which never holds two live copies at once.
    pub const TRIVIALLY_RELOCATABLE: bool = Self::TRIVIALLY_DESTRUCTIBLE;

    /// `T` occupies no memory.
    pub const ZERO_SIZED: bool = mem::size_of::<T>() == 0;
}

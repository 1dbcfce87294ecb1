// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Internal logging macro.
//!
//! `trace!` forwards to `tracing::trace!` with the `tracing` feature and
//! expands to nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "spill_vec", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

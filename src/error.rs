// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `spill-vec`.
//!
//! Every precondition check in the crate reports one of these variants. The
//! checked (`try_*`) forms hand them back as values; the crashing forms pass
//! them to [`crash`], which panics with the diagnostic and the caller's
//! source location.
//!
//! Errors are `Copy` and implement `core::error::Error`.

/// Errors reported by bounds resolution, spans and [`SpillVec`](crate::SpillVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A range started past the end of the container.
    #[error("bounds-check failed: {start} (start) > {len} (len)")]
    StartPastLen { start: usize, len: usize },
    /// A single index was not inside the container.
    #[error("bounds-check failed: {index} (index) >= {len} (len)")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A range ended before it started.
    #[error("bounds-check failed: {end} (end) < {start} (start)")]
    StartPastEnd { start: usize, end: usize },
    /// A range ended past the end of the container.
    #[error("bounds-check failed: {end} (end) > {len} (len)")]
    EndPastLen { end: usize, len: usize },
    /// An inclusive range ended at or past the end of the container.
    #[error("bounds-check failed: {end} (including_end) >= {len} (len)")]
    InclusiveEndPastLen { end: usize, len: usize },
    /// `start + count` ran past the end of the container.
    #[error("bounds-check failed: {start} (start) + {count} (count) > {len} (len)")]
    CountPastLen {
        start: usize,
        count: usize,
        len: usize,
    },
    /// An open-ended range was resolved without a known length.
    #[error("bounds-check failed: open-ended range with unknown length")]
    UnknownLen,
    /// A statically sized span was built from a runtime length that differs.
    #[error("extent mismatch: expected {expected} elements, got {actual}")]
    ExtentMismatch { expected: usize, actual: usize },
    /// A length was set past the current capacity.
    #[error("length {len} exceeds capacity {capacity}")]
    LenPastCapacity { len: usize, capacity: usize },
    /// A capacity computation overflowed `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The allocator could not satisfy a request.
    #[error("allocation of {size} bytes (align {align}) failed")]
    AllocFailed { size: usize, align: usize },
}

/// Panics with `err` as the message, reporting the caller's location.
///
/// All fail-fast checks in the crate funnel through here so that the message
/// format stays uniform and the panic path stays out of line.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn crash(err: Error) -> ! {
    panic!("{err}")
}

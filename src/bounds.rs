// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Range specifications and their resolution against a container length.
//!
//! A [`Bounds`] names a start offset plus at most one way of saying where the
//! range stops: an exclusive `end`, an `including_end`, or a `count`. When more
//! than one is set, the first of `end`, `including_end`, `count` wins. With
//! none set, the range runs to the end of the container.
//!
//! Every `core::ops` range over `usize` converts into a `Bounds`, so the
//! crate's range-taking APIs accept `2..4`, `..=3`, `5..` and friends as well
//! as the field-by-field builder form.

// Crate imports
use crate::error::{crash, Error};

// Core imports
use core::{
    fmt,
    ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
};

/// A range of indices, resolved lazily against a container length.
///
/// # Examples
///
/// ```rust
/// use spill_vec::Bounds;
///
/// let b = Bounds::new().start(2).count(3);
/// assert_eq!(b.compute_count(10), 3);
/// assert_eq!(Bounds::from(4..).try_compute_count(Some(3)), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// First index in the range.
    pub start: usize,
    /// Exclusive end.
    pub end: Option<usize>,
    /// Inclusive end.
    pub including_end: Option<usize>,
    /// Number of elements starting at `start`.
    pub count: Option<usize>,
}

impl Bounds {
    /// The whole container.
    #[inline]
    pub const fn new() -> Self {
        Self {
            start: 0,
            end: None,
            including_end: None,
            count: None,
        }
    }

    /// The single element at `idx`.
    #[inline]
    pub const fn index(idx: usize) -> Self {
        Self {
            start: idx,
            end: None,
            including_end: None,
            count: Some(1),
        }
    }

    /// Sets the start offset.
    #[inline]
    #[must_use]
    pub const fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Sets the exclusive end.
    #[inline]
    #[must_use]
    pub const fn end(mut self, end: usize) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the inclusive end.
    #[inline]
    #[must_use]
    pub const fn including_end(mut self, end: usize) -> Self {
        self.including_end = Some(end);
        self
    }

    /// Sets the element count.
    #[inline]
    #[must_use]
    pub const fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// `true` if this names exactly one index, as produced by [`Bounds::index`].
    #[inline]
    const fn is_index(&self) -> bool {
        self.end.is_none() && self.including_end.is_none() && matches!(self.count, Some(1))
    }

    /// Resolves to `start..end`, reporting the first check that fails.
    ///
    /// `max` is the container length when known.
    fn resolve(&self, max: Option<usize>) -> Result<Range<usize>, Error> {
        let start = self.start;
        if let Some(len) = max {
            if self.is_index() && start >= len {
                return Err(Error::IndexOutOfBounds { index: start, len });
            }
            if start > len {
                return Err(Error::StartPastLen { start, len });
            }
        }

        let end = if let Some(end) = self.end {
            if end < start {
                return Err(Error::StartPastEnd { start, end });
            }
            if let Some(len) = max.filter(|&len| end > len) {
                return Err(Error::EndPastLen { end, len });
            }
            end
        } else if let Some(last) = self.including_end {
            if last < start {
                return Err(Error::StartPastEnd { start, end: last });
            }
            match max {
                Some(len) if last >= len => {
                    return Err(Error::InclusiveEndPastLen { end: last, len })
                }
                // `last < len <= usize::MAX`, so this cannot wrap.
                Some(_) => last + 1,
                None => last.checked_add(1).ok_or(Error::CapacityOverflow)?,
            }
        } else if let Some(count) = self.count {
            let end = start.checked_add(count);
            match (end, max) {
                (Some(end), Some(len)) if end <= len => end,
                (Some(end), None) => end,
                (_, Some(len)) => return Err(Error::CountPastLen { start, count, len }),
                (None, None) => return Err(Error::CapacityOverflow),
            }
        } else {
            max.ok_or(Error::UnknownLen)?
        };

        Ok(start..end)
    }

    /// Computes how many elements these bounds select, or `None` if they are
    /// invalid for a container of length `max`.
    ///
    /// When `max` is `None` the length is unknown: only the relative checks
    /// run, and an open-ended range fails.
    #[inline]
    pub fn try_compute_count(&self, max: Option<usize>) -> Option<usize> {
        self.resolve(max).ok().map(|r| r.len())
    }

    /// Computes how many elements these bounds select in a container of
    /// length `len`, returning the failed check as an [`Error`].
    #[inline]
    pub fn check(&self, len: usize) -> Result<usize, Error> {
        self.resolve(Some(len)).map(|r| r.len())
    }

    /// Computes how many elements these bounds select in a container of
    /// length `len`.
    ///
    /// # Panics
    ///
    /// Panics with a bounds-check diagnostic if the range does not fit.
    #[inline]
    #[track_caller]
    pub fn compute_count(&self, len: usize) -> usize {
        match self.check(len) {
            Ok(n) => n,
            Err(e) => crash(e),
        }
    }

    /// Returns the exclusive end these bounds resolve to in a container of
    /// length `len`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit.
    #[inline]
    #[track_caller]
    pub fn end_for(&self, len: usize) -> usize {
        self.to_range(len).end
    }

    /// Resolves to an index range in a container of length `len`, or `None`.
    #[inline]
    pub fn try_to_range(&self, len: usize) -> Option<Range<usize>> {
        self.resolve(Some(len)).ok()
    }

    /// Resolves to an index range without checking it against `len`.
    ///
    /// The caller guarantees the bounds fit; debug builds verify it.
    #[inline]
    pub(crate) fn to_range_unchecked(&self, len: usize) -> Range<usize> {
        debug_assert!(self.check(len).is_ok());
        let start = self.start;
        let end = match (self.end, self.including_end, self.count) {
            (Some(end), _, _) => end,
            (None, Some(last), _) => last.wrapping_add(1),
            (None, None, Some(count)) => start.wrapping_add(count),
            (None, None, None) => len,
        };
        start..end
    }

    /// Resolves to an index range in a container of length `len`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit.
    #[inline]
    #[track_caller]
    pub fn to_range(&self, len: usize) -> Range<usize> {
        match self.resolve(Some(len)) {
            Ok(r) => r,
            Err(e) => crash(e),
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut sep = "";
        if self.start != 0 {
            write!(f, ".start = {}", self.start)?;
            sep = ", ";
        }
        if let Some(end) = self.end {
            write!(f, "{sep}.end = {end}")?;
        } else if let Some(end) = self.including_end {
            write!(f, "{sep}.including_end = {end}")?;
        } else if let Some(count) = self.count {
            write!(f, "{sep}.count = {count}")?;
        }
        f.write_str("}")
    }
}

impl From<usize> for Bounds {
    #[inline]
    fn from(idx: usize) -> Self {
        Self::index(idx)
    }
}
impl From<Range<usize>> for Bounds {
    #[inline]
    fn from(r: Range<usize>) -> Self {
        Self::new().start(r.start).end(r.end)
    }
}
impl From<RangeFrom<usize>> for Bounds {
    #[inline]
    fn from(r: RangeFrom<usize>) -> Self {
        Self::new().start(r.start)
    }
}
impl From<RangeTo<usize>> for Bounds {
    #[inline]
    fn from(r: RangeTo<usize>) -> Self {
        Self::new().end(r.end)
    }
}
impl From<RangeToInclusive<usize>> for Bounds {
    #[inline]
    fn from(r: RangeToInclusive<usize>) -> Self {
        Self::new().including_end(r.end)
    }
}
impl From<RangeInclusive<usize>> for Bounds {
    #[inline]
    fn from(r: RangeInclusive<usize>) -> Self {
        Self::new().start(*r.start()).including_end(*r.end())
    }
}
impl From<RangeFull> for Bounds {
    #[inline]
    fn from(_: RangeFull) -> Self {
        Self::new()
    }
}

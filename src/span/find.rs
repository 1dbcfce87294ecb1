// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Searching: `find`, `contains`, `split_once`, `split`, prefix and suffix
//! matching, and binary search.
//!
//! Each search comes in three flavors, matching on a single element, a
//! contiguous subsequence, or a predicate. Element and subsequence matches go
//! through slice equality, which core lowers to `memchr`/`memcmp` for
//! byte-comparable element types.

// Crate imports
use crate::span::Span;

// Core imports
use core::{cmp::Ordering, iter::FusedIterator};

#[inline]
fn find_seq<T: PartialEq>(hay: &[T], needle: &[T]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    hay.windows(needle.len()).position(|w| w == needle)
}

impl<'a, T, const N: usize> Span<'a, T, N> {
    /// Position of the first element equal to `needle`.
    #[inline]
    pub fn find(self, needle: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|x| x == needle)
    }

    /// Position of the first occurrence of the subsequence `needle`.
    ///
    /// An empty needle matches at `0`.
    #[inline]
    pub fn find_slice(self, needle: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        find_seq(self.as_slice(), needle)
    }

    /// Position of the first element matching `pred`.
    #[inline]
    pub fn find_by(self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.as_slice().iter().position(pred)
    }

    /// Whether some element equals `needle`.
    #[inline]
    pub fn contains(self, needle: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(needle)
    }

    /// Whether `needle` occurs as a subsequence.
    #[inline]
    pub fn contains_slice(self, needle: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.find_slice(needle).is_some()
    }

    /// Whether some element matches `pred`.
    #[inline]
    pub fn contains_by(self, pred: impl FnMut(&T) -> bool) -> bool {
        self.as_slice().iter().any(pred)
    }

    /// Splits around the first element equal to `needle`, which is dropped
    /// from both halves.
    #[inline]
    pub fn split_once(self, needle: &T) -> Option<(Span<'a, T>, Span<'a, T>)>
    where
        T: PartialEq,
    {
        let idx = self.find(needle)?;
        self.split_around(idx, 1)
    }

    /// Splits around the first occurrence of `needle`.
    #[inline]
    pub fn split_once_slice(self, needle: &[T]) -> Option<(Span<'a, T>, Span<'a, T>)>
    where
        T: PartialEq,
    {
        let idx = self.find_slice(needle)?;
        self.split_around(idx, needle.len())
    }

    /// Splits around the first element matching `pred`.
    #[inline]
    pub fn split_once_by(
        self,
        pred: impl FnMut(&T) -> bool,
    ) -> Option<(Span<'a, T>, Span<'a, T>)> {
        let idx = self.find_by(pred)?;
        self.split_around(idx, 1)
    }

    fn split_around(self, idx: usize, len: usize) -> Option<(Span<'a, T>, Span<'a, T>)> {
        let (head, rest) = self.split_at(idx)?;
        let (_, tail) = rest.split_at(len)?;
        Some((head, tail))
    }

    /// Iterates over the subspans separated by elements equal to `needle`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spill_vec::Span;
    ///
    /// let data = [1, 0, 2, 3, 0, 4];
    /// let parts: Vec<_> = Span::new(&data[..]).split(&0).collect();
    /// assert_eq!(parts, [&[1][..], &[2, 3], &[4]]);
    /// ```
    #[inline]
    pub fn split<'n>(
        self,
        needle: &'n T,
    ) -> Split<'a, T, impl FnMut(&[T]) -> Option<(usize, usize)> + 'n>
    where
        T: PartialEq,
    {
        Split::new(self.as_dynamic(), move |hay: &[T]| {
            hay.iter().position(|x| x == needle).map(|i| (i, 1))
        })
    }

    /// Iterates over the subspans separated by occurrences of `needle`.
    ///
    /// An empty separator yields the whole span once.
    #[inline]
    pub fn split_slice<'n>(
        self,
        needle: &'n [T],
    ) -> Split<'a, T, impl FnMut(&[T]) -> Option<(usize, usize)> + 'n>
    where
        T: PartialEq,
    {
        Split::new(self.as_dynamic(), move |hay: &[T]| {
            if needle.is_empty() {
                return None;
            }
            find_seq(hay, needle).map(|i| (i, needle.len()))
        })
    }

    /// Iterates over the subspans separated by elements matching `pred`.
    #[inline]
    pub fn split_by<P>(
        self,
        mut pred: P,
    ) -> Split<'a, T, impl FnMut(&[T]) -> Option<(usize, usize)>>
    where
        P: FnMut(&T) -> bool,
    {
        Split::new(self.as_dynamic(), move |hay: &[T]| {
            hay.iter().position(&mut pred).map(|i| (i, 1))
        })
    }

    // Prefixes and suffixes

    /// Whether the span begins with `prefix`.
    #[inline]
    pub fn starts_with(self, prefix: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().starts_with(prefix)
    }

    /// Whether the span ends with `suffix`.
    #[inline]
    pub fn ends_with(self, suffix: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().ends_with(suffix)
    }

    /// The rest of the span after `prefix`, or `None` if it does not start
    /// with it.
    #[inline]
    pub fn strip_prefix(self, prefix: &[T]) -> Option<Span<'a, T>>
    where
        T: PartialEq,
    {
        if !self.starts_with(prefix) {
            return None;
        }
        self.at_bounds(prefix.len()..)
    }

    /// The span before `suffix`, or `None` if it does not end with it.
    #[inline]
    pub fn strip_suffix(self, suffix: &[T]) -> Option<Span<'a, T>>
    where
        T: PartialEq,
    {
        if !self.ends_with(suffix) {
            return None;
        }
        self.at_bounds(..self.len() - suffix.len())
    }

    // Binary search

    /// Binary-searches a sorted span for `sought`.
    ///
    /// Returns `Ok(idx)` if found, or `Err(idx)` with the insertion point.
    #[inline]
    pub fn bisect(self, sought: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        self.as_slice().binary_search(sought)
    }

    /// Binary-searches a span sorted by `key` for the key `sought`.
    #[inline]
    pub fn bisect_by_key<K: Ord>(
        self,
        sought: &K,
        key: impl FnMut(&T) -> K,
    ) -> Result<usize, usize> {
        self.as_slice().binary_search_by_key(sought, key)
    }

    /// Binary-searches with a comparator that orders each element against
    /// the sought value.
    #[inline]
    pub fn bisect_by(self, cmp: impl FnMut(&T) -> Ordering) -> Result<usize, usize> {
        self.as_slice().binary_search_by(cmp)
    }
}

impl<'a, T> Span<'a, T> {
    /// Like [`strip_prefix`](Span::strip_prefix), but updates `self` in
    /// place and reports whether it matched.
    #[inline]
    pub fn consume_prefix(&mut self, prefix: &[T]) -> bool
    where
        T: PartialEq,
    {
        match self.strip_prefix(prefix) {
            Some(rest) => {
                *self = rest;
                true
            }
            None => false,
        }
    }

    /// Like [`strip_suffix`](Span::strip_suffix), but updates `self` in
    /// place and reports whether it matched.
    #[inline]
    pub fn consume_suffix(&mut self, suffix: &[T]) -> bool
    where
        T: PartialEq,
    {
        match self.strip_suffix(suffix) {
            Some(rest) => {
                *self = rest;
                true
            }
            None => false,
        }
    }
}

/// Iterator over the subspans of a span between separator matches.
///
/// Created by [`Span::split`], [`Span::split_slice`] and [`Span::split_by`].
/// Adjacent separators, and separators at either end, produce empty
/// subspans, as with [`slice::split`].
pub struct Split<'a, T, F> {
    rest: Span<'a, T>,
    matcher: F,
    done: bool,
}

impl<'a, T, F> Split<'a, T, F>
where
    F: FnMut(&[T]) -> Option<(usize, usize)>,
{
    #[inline]
    fn new(span: Span<'a, T>, matcher: F) -> Self {
        Self {
            rest: span,
            matcher,
            done: false,
        }
    }

    /// The part of the span not yet yielded.
    #[inline]
    pub fn rest(&self) -> Span<'a, T> {
        if self.done {
            Span::empty()
        } else {
            self.rest
        }
    }
}

impl<'a, T, F> Iterator for Split<'a, T, F>
where
    F: FnMut(&[T]) -> Option<(usize, usize)>,
{
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        if self.done {
            return None;
        }
        let hay = self.rest.as_slice();
        match (self.matcher)(hay) {
            Some((at, len)) => {
                self.rest = Span::new(&hay[at + len..]);
                Some(&hay[..at])
            }
            None => {
                self.done = true;
                Some(hay)
            }
        }
    }
}

impl<'a, T, F> FusedIterator for Split<'a, T, F> where F: FnMut(&[T]) -> Option<(usize, usize)> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::span::Span;
    use alloc::vec::Vec;

    #[test]
    fn test_find_forms() {
        let data = *b"hello world";
        let s = Span::new(&data[..]);
        assert_eq!(s.find(&b'o'), Some(4));
        assert_eq!(s.find(&b'z'), None);
        assert_eq!(s.find_slice(b"wor"), Some(6));
        assert_eq!(s.find_slice(b""), Some(0));
        assert_eq!(s.find_slice(b"hello world!"), None);
        assert_eq!(s.find_by(|c| c.is_ascii_whitespace()), Some(5));
        assert!(s.contains(&b'w'));
        assert!(s.contains_slice(b"lo w"));
        assert!(!s.contains_by(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_find_non_byte_elements() {
        let data = [1.5f64, 2.5, 3.5];
        let s = Span::new(&data[..]);
        assert_eq!(s.find(&2.5), Some(1));
        assert_eq!(s.find_slice(&[2.5, 3.5]), Some(1));
    }

    #[test]
    fn test_split_once() {
        let data = *b"key=value=x";
        let s = Span::new(&data[..]);
        let (k, v) = s.split_once(&b'=').unwrap();
        assert_eq!(k, *b"key");
        assert_eq!(v, *b"value=x");
        let (k, v) = s.split_once_slice(b"=v").unwrap();
        assert_eq!(k, *b"key");
        assert_eq!(v, *b"alue=x");
        let (k, v) = s.split_once_by(|&c| c == b'x').unwrap();
        assert_eq!(k, *b"key=value=");
        assert!(v.is_empty());
        assert!(s.split_once(&b'#').is_none());
    }

    #[test]
    fn test_split_iterators() {
        let data = [0, 1, 0, 0, 2, 3, 0];
        let s = Span::new(&data[..]);
        let parts: Vec<&[i32]> = s.split(&0).collect();
        assert_eq!(parts, [&[][..], &[1], &[], &[2, 3], &[]]);

        let parts: Vec<&[i32]> = s.split_slice(&[0, 2]).collect();
        assert_eq!(parts, [&[0, 1, 0][..], &[3, 0]]);

        let parts: Vec<&[i32]> = s.split_slice(&[]).collect();
        assert_eq!(parts, [&data[..]]);

        let parts: Vec<&[i32]> = s.split_by(|&x| x > 1).collect();
        assert_eq!(parts, [&[0, 1, 0, 0][..], &[], &[0]]);

        let empty: Vec<&[i32]> = Span::<i32>::empty().split(&0).collect();
        assert_eq!(empty, [&[][..] as &[i32]]);
    }

    #[test]
    fn test_split_rest() {
        let data = [1, 0, 2];
        let mut it = Span::new(&data[..]).split(&0);
        assert_eq!(it.rest(), [1, 0, 2]);
        it.next();
        assert_eq!(it.rest(), [2]);
        it.next();
        assert!(it.rest().is_empty());
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_prefix_suffix() {
        let data = *b"prefix-body-suffix";
        let s = Span::new(&data[..]);
        assert!(s.starts_with(b"pre"));
        assert!(s.ends_with(b"fix"));
        assert!(!s.starts_with(b"prefix-body-suffix-longer"));
        assert_eq!(s.strip_prefix(b"prefix-").unwrap(), *b"body-suffix");
        assert_eq!(s.strip_suffix(b"-suffix").unwrap(), *b"prefix-body");
        assert!(s.strip_prefix(b"body").is_none());

        let mut m = s;
        assert!(m.consume_prefix(b"prefix-"));
        assert!(m.consume_suffix(b"-suffix"));
        assert!(!m.consume_prefix(b"x"));
        assert_eq!(m, *b"body");
    }

    #[test]
    fn test_bisect() {
        let data = [1, 3, 5, 7];
        let s = Span::new(&data[..]);
        assert_eq!(s.bisect(&5), Ok(2));
        assert_eq!(s.bisect(&4), Err(2));
        assert_eq!(s.bisect_by_key(&14, |x| x * 2), Ok(3));
        assert_eq!(s.bisect_by(|x| x.cmp(&0)), Err(0));
    }
}

// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, bounds::Bounds, error::Error, vec::SpillVec};

impl<T, const N: usize, A: Allocator + Clone> SpillVec<T, N, A> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)` and a clone of
    ///   `self`'s allocator.
    ///
    /// Returns [`Error::StartPastLen`] if `at > self.len()`, or the error of
    /// reserving the tail's storage. On error, `self` is left unchanged.
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len();
        let tail_len = Bounds::new().start(at).check(len)?;

        let mut other = Self::new_in(self.alloc.clone());
        other.try_reserve(tail_len)?;

        // SAFETY: `[at, len)` is live and `other` has room for it. `self`
        // forgets the tail before `other` claims it.
        unsafe {
            self.set_len_raw(at);
            other.data().relocate_n(self.data().add(at), tail_len);
            other.set_len_raw(tail_len);
        }
        Ok(other)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        testing::{values, Tracked},
        vec::SpillVec,
        Error,
    };
    use core::cell::Cell;

    #[test]
    fn test_split_off_and_append_round_trip() {
        for at in 0..=9 {
            let mut v: SpillVec<i32, 4> = (0..9).collect();
            let mut tail = v.split_off(at).unwrap();
            assert_eq!(v.len(), at);
            assert_eq!(tail.len(), 9 - at);
            assert!(tail.iter().copied().eq(at as i32..9));
            v.append(&mut tail);
            assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        }
    }

    #[test]
    fn test_split_off_out_of_bounds() {
        let mut v: SpillVec<i32, 4> = SpillVec::from([1, 2]);
        assert_eq!(
            v.split_off(3).unwrap_err(),
            Error::StartPastLen { start: 3, len: 2 }
        );
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_split_off_moves_without_drops() {
        let drops = Cell::new(0);
        {
            let mut v: SpillVec<Tracked<'_>, 2> = SpillVec::new();
            for i in 0..5 {
                v.push(Tracked::new(i, &drops));
            }
            let tail = v.split_off(2).unwrap();
            assert_eq!(values(&v), [0, 1]);
            assert_eq!(values(&tail), [2, 3, 4]);
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 5);
    }
}

// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::Allocator,
    bounds::Bounds,
    error::{crash, Error},
    ptr::Ptr,
    vec::SpillVec,
};

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Appends `value` and returns a reference to it.
    ///
    /// Grows like [`reserve(1)`](Self::reserve) when full.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, value: T) -> &mut T {
        let len = self.len();
        if len == self.capacity() {
            self.reserve(1);
        }
        // SAFETY: `len < capacity()`, so the slot exists and is dead.
        unsafe {
            self.data().add(len).construct(value);
            self.set_len_raw(len + 1);
            self.data().add(len).as_mut()
        }
    }

    /// Inserts `value` at `idx`, shifting later elements up by one.
    ///
    /// # Panics
    ///
    /// Panics if `idx > len`.
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, idx: usize, value: T) -> &mut T {
        match self.try_insert(idx, value) {
            Ok(slot) => slot,
            Err(e) => crash(e),
        }
    }

    /// Inserts `value` at `idx`, or returns [`Error::StartPastLen`] if
    /// `idx > len`. On error `value` is dropped and the vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spill_vec::{Error, SpillVec};
    ///
    /// let mut v: SpillVec<char, 4> = SpillVec::from(['a', 'c']);
    /// *v.try_insert(1, 'b').unwrap() = 'B';
    /// assert_eq!(v, ['a', 'B', 'c']);
    /// assert_eq!(v.try_insert(9, 'z'), Err(Error::StartPastLen { start: 9, len: 3 }));
    /// ```
    pub fn try_insert(&mut self, idx: usize, value: T) -> Result<&mut T, Error> {
        let len = self.len();
        Bounds::new().start(idx).check(len)?;
        if len == self.capacity() {
            self.try_reserve(1)?;
        }
        // SAFETY: the check above bounds `idx`, and the reserve leaves room
        // for the gap.
        unsafe {
            self.open_gap(idx, 1).construct(value);
            self.set_len_raw(len + 1);
            Ok(self.data().add(idx).as_mut())
        }
    }

    /// Opens `count` dead slots at `idx` and returns a pointer to the first.
    ///
    /// The length already counts the new slots; the caller must construct
    /// each of them before the vector is used again.
    ///
    /// # Safety
    ///
    /// All `count` returned slots must be constructed before any other use of
    /// the vector, including drop.
    ///
    /// # Panics
    ///
    /// Panics if `idx > len`.
    #[track_caller]
    pub unsafe fn insert_uninit(&mut self, idx: usize, count: usize) -> Ptr<T> {
        let len = self.len();
        Bounds::new().start(idx).compute_count(len);
        self.reserve(count);
        self.open_gap(idx, count);
        self.set_len_raw(len + count);
        self.data().add(idx)
    }

    /// Shifts `[idx, len)` up by `count`, leaving `[idx, idx + count)` dead.
    /// The length is not updated, and the returned pointer is only valid
    /// until the next `&mut self` call.
    ///
    /// # Safety
    ///
    /// `idx <= len` and `len + count <= capacity()`.
    #[inline]
    pub(crate) unsafe fn open_gap(&mut self, idx: usize, count: usize) -> Ptr<T> {
        let len = self.len();
        debug_assert!(idx <= len && len + count <= self.capacity());
        if count != 0 {
            self.spare_span().shift_within(idx + count, idx, len - idx);
        }
        self.data().add(idx)
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
    fn test_push_returns_slot() {
        let mut v: SpillVec<i32, 2> = SpillVec::new();
        *v.push(1) += 10;
        v.push(2);
        v.push(3);
        assert_eq!(v, [11, 2, 3]);
        assert!(v.is_on_heap());
    }

    #[test]
    fn test_returned_slots_stay_writable_inline() {
        let mut v: SpillVec<i32, 4> = SpillVec::new();
        let first = v.push(1);
        *first *= 5;
        *v.insert(0, 2) += 1;
        *v.try_insert(2, 7).unwrap() -= 1;
        assert!(v.is_inlined());
        assert_eq!(v, [3, 5, 6]);
        assert_eq!(v.swap_remove(0), 3);
        assert_eq!(v, [6, 5]);
    }

    #[test]
    fn test_insert_positions() {
        let mut v: SpillVec<i32, 3> = SpillVec::new();
        v.insert(0, 2);
        v.insert(0, 0);
        v.insert(1, 1);
        v.insert(3, 3);
        assert_eq!(v, [0, 1, 2, 3]);
        assert!(v.is_on_heap());
    }

    #[test]
    #[should_panic(expected = "bounds-check failed: 4 (start) > 3 (len)")]
    fn test_insert_past_len_panics() {
        let mut v: SpillVec<i32, 3> = SpillVec::from([1, 2, 3]);
        v.insert(4, 0);
    }

    #[test]
    fn test_try_insert_drops_value_on_error() {
        let drops = Cell::new(0);
        let mut v: SpillVec<Tracked<'_>, 2> = SpillVec::new();
        v.push(Tracked::new(1, &drops));
        let err = v.try_insert(5, Tracked::new(2, &drops)).unwrap_err();
        assert_eq!(err, Error::StartPastLen { start: 5, len: 1 });
        assert_eq!(drops.get(), 1);
        assert_eq!(values(&v), [1]);
    }

    #[test]
    fn test_insert_uninit_opens_gap() {
        let drops = Cell::new(0);
        {
            let mut v: SpillVec<Tracked<'_>, 4> = SpillVec::new();
            for i in 0..4 {
                v.push(Tracked::new(i, &drops));
            }
            unsafe {
                let p = v.insert_uninit(1, 3);
                for i in 0..3 {
                    p.add(i).construct(Tracked::new(10 + i as i32, &drops));
                }
            }
            assert_eq!(values(&v), [0, 10, 11, 12, 1, 2, 3]);
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 7);
    }
}

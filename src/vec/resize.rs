// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, vec::SpillVec};

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Resizes to `new_len`, filling new slots with clones of `value`.
    #[track_caller]
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len - len);
        for _ in len + 1..new_len {
            self.push(value.clone());
        }
        self.push(value);
    }

    /// Resizes to `new_len`, filling new slots with the results of `f`.
    #[track_caller]
    pub fn resize_with(&mut self, new_len: usize, mut f: impl FnMut() -> T) {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len - len);
        for _ in len..new_len {
            self.push(f());
        }
    }

    /// Resizes to `new_len` without initializing new slots.
    ///
    /// Shrinking destroys the cut-off elements; growing reserves room and
    /// counts the new slots as live.
    ///
    /// # Safety
    ///
    /// When growing, every slot in `[old_len, new_len)` must be constructed
    /// before the vector is used again, including drop.
    #[track_caller]
    pub unsafe fn resize_uninit(&mut self, new_len: usize) {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
        } else {
            self.reserve(new_len - len);
            self.set_len_raw(new_len);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        testing::{values, Tracked},
        vec::SpillVec,
    };
    use core::cell::Cell;

    #[test]
    fn test_resize() {
        let mut v: SpillVec<i32, 2> = SpillVec::from([1]);
        v.resize(4, 7);
        assert_eq!(v, [1, 7, 7, 7]);
        v.resize(2, 0);
        assert_eq!(v, [1, 7]);
        v.resize(2, 9);
        assert_eq!(v, [1, 7]);
    }

    #[test]
    fn test_resize_with_counter() {
        let mut n = 0;
        let mut v: SpillVec<i32, 2> = SpillVec::new();
        v.resize_with(5, || {
            n += 1;
            n
        });
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_resize_drops() {
        let drops = Cell::new(0);
        let mut v: SpillVec<Tracked<'_>, 2> = SpillVec::new();
        v.resize(3, Tracked::new(5, &drops));
        assert_eq!(drops.get(), 0);
        assert_eq!(values(&v), [5, 5, 5]);
        v.resize(1, Tracked::new(0, &drops));
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_resize_uninit() {
        let mut v: SpillVec<u32, 2> = SpillVec::from([1]);
        unsafe {
            v.resize_uninit(4);
            let p = v.as_mut_ptr();
            for i in 1..4 {
                p.add(i).write(i as u32 * 10);
            }
        }
        assert_eq!(v, [1, 10, 20, 30]);
        unsafe { v.resize_uninit(1) };
        assert_eq!(v, [1]);
    }
}

// This file is part of spill-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, vec::SpillVec};

impl<T, const N: usize, A: Allocator> SpillVec<T, N, A> {
    /// Retains only the elements for which `keep` returns `true`, preserving
    /// their order.
    ///
    /// # Examples
    /// ```
    /// # use spill_vec::SpillVec;
    /// let mut v: SpillVec<i32, 4> = SpillVec::from([1, 2, 3, 4, 5]);
    /// v.retain(|x| x % 2 == 1);
    /// assert_eq!(v, [1, 3, 5]);
    /// ```
    #[inline]
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.retain_mut(|x| keep(x));
    }

    /// Like [`retain`](Self::retain), but `keep` may modify the elements.
    ///
    /// If `keep` panics the remaining elements are leaked, never dropped
    /// twice.
    pub fn retain_mut(&mut self, mut keep: impl FnMut(&mut T) -> bool) {
        let len = self.len();
        // SAFETY: the length is zero while the loop runs, so no element is
        // reachable through `self` while slots move. `write <= read` always.
        unsafe {
            self.set_len_raw(0);
            let base = self.data();
            let mut write = 0;
            for read in 0..len {
                let cur = base.add(read);
                if keep(cur.as_mut()) {
                    if read != write {
                        base.add(write).relocate_from(cur);
                    }
                    write += 1;
                } else {
                    cur.destroy();
                }
            }
            self.set_len_raw(write);
        }
    }
}

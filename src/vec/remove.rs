// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

// Core imports
use core::ptr;

impl<T, R> Vector<T, R> {
    /// Removes and returns the value at `index`, shifting `(index, len)` one
    /// slot to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        let at = self.storage.address_of(index);
        // SAFETY: `index < len`, so slot `index` is live. After reading it out,
        // the overlapping copy closes the gap and the last slot becomes spare,
        // which the new `len` reflects.
        unsafe {
            let out = at.read();
            ptr::copy(at.add(1), at, len - index - 1);
            self.len = len - 1;
            out
        }
    }

    /// Removes and drops the value at `index`, returning `index`, which now
    /// names the value that followed the erased one (or `len()`).
    ///
    /// The value is dropped after the vector is back in a consistent state,
    /// so a panicking destructor cannot leave a hole.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the last value, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was live and is now outside
        // `[0, len)`, so reading it out transfers ownership exactly once.
        Some(unsafe { self.storage.slot(self.len).assume_init_read() })
    }

    /// Drops the last value.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "pop_back on an empty Vector");
        drop(self.pop());
    }
}

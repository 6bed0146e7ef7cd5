// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, relocate::Relocate, vec::Vector};

// Core imports
use core::ptr;

impl<T: Default, R: Relocate<T>> Vector<T, R> {
    /// Resizes to `new_len`.
    ///
    /// Growing reserves exactly `new_len` and default-constructs the new tail;
    /// shrinking drops the excess tail. Capacity never shrinks.
    ///
    /// If a `T::default()` call panics while growing, the values constructed so
    /// far stay in the vector and `len` counts them (basic guarantee).
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len)?;
        while self.len < new_len {
            self.write_next(T::default());
        }
        Ok(())
    }
}

impl<T, R> Vector<T, R> {
    /// Drops every value past `new_len`; a no-op if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(self.storage.address_of(new_len), self.len - new_len);
        // Shorten first: a panicking destructor leaks the rest instead of
        // leaving dropped values inside `[0, len)`.
        self.len = new_len;
        // SAFETY: `tail` was the live range `[new_len, old_len)` and is now
        // outside `[0, len)`.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every value. Keeps the block.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Vector,
        testing::{self, Tracked},
    };
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_resize_grow_and_shrink() {
        let mut v: Vector<i32> = [1, 2].into();
        v.resize(5).unwrap();
        assert_eq!(v, [1, 2, 0, 0, 0]);
        assert_eq!(v.capacity(), 5);
        v.resize(1).unwrap();
        assert_eq!(v, [1]);
        assert_eq!(v.capacity(), 5);
        v.resize(1).unwrap();
        assert_eq!(v, [1]);
    }

    #[test]
    fn test_resize_shrink_drops_tail() {
        testing::reset();
        let mut v: Vector<Tracked> = Vector::with_len(6).unwrap();
        v.resize(2).unwrap();
        assert_eq!(testing::drops(), 4);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_resize_panicking_default_keeps_valid_state() {
        testing::reset();
        let mut v: Vector<Tracked> = Vector::with_len(2).unwrap();
        testing::fail_default_after(1);

        let res = catch_unwind(AssertUnwindSafe(|| v.resize(5)));

        assert!(res.is_err());
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 5);
        drop(v);
        assert_eq!(testing::drops(), 3);
    }

    #[test]
    fn test_truncate_and_clear() {
        let mut v: Vector<String> = Vector::new();
        v.extend(["a", "b", "c", "d"].map(String::from));
        v.truncate(10);
        assert_eq!(v.len(), 4);
        v.truncate(2);
        assert_eq!(v, ["a".to_string(), "b".into()]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 4);
    }
}

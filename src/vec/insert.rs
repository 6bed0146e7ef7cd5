// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::RawStorage,
    relocate::{InitGuard, Relocate},
    vec::Vector,
};

// Core imports
use core::ptr;

impl<T, R: Relocate<T>> Vector<T, R> {
    /// Inserts `value` at `index`. See [`emplace`](Self::emplace).
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        self.emplace(index, || value)
    }

    /// Constructs a value with `make` at `index`, shifting `[index, len)` up by
    /// one slot, and returns `index`.
    ///
    /// `index == len` appends, like [`emplace_back`](Self::emplace_back).
    ///
    /// - When full, a doubled block is allocated, the new value is constructed
    ///   there, then the prefix `[0, index)` and the suffix `[index, len)` are
    ///   relocated around it. Any panic leaves the vector unchanged.
    /// - Otherwise `make` runs first, into a temporary; only then is the tail
    ///   shifted and the temporary moved into place. A panicking `make`
    ///   therefore leaves the vector unchanged as well.
    ///
    /// Returns an [`Error`] without calling `make` if allocation fails.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn emplace<F>(&mut self, index: usize, make: F) -> Result<usize, Error>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );

        if len == self.capacity() {
            let mut block = RawStorage::allocate(self.grown_capacity()?)?;
            block.slot_mut(index).write(make());
            let fresh = InitGuard::new(block.address_of(index), 1);

            let src = self.storage.as_ptr();
            // SAFETY: `[0, index)` and `[index, len)` are live in the old block;
            // their destinations `[0, index)` and `[index + 1, len + 1)` in the
            // new block are uninitialized and fit because the new capacity is
            // greater than `len`.
            unsafe { R::transfer(src, block.as_mut_ptr(), index) };
            let prefix = InitGuard::new(block.as_mut_ptr(), index);
            // SAFETY: as above, for the suffix.
            unsafe { R::transfer(src.add(index), block.address_of(index + 1), len - index) };

            prefix.disarm();
            fresh.disarm();
            self.install(block);
        } else {
            let value = make();
            let at = self.storage.address_of(index);
            // SAFETY: `len < capacity`, so the shifted range `[index + 1, len + 1)`
            // is inside the block. `ptr::copy` handles the overlap, and after it
            // slot `index` is logically uninitialized and ready for `value`.
            unsafe {
                ptr::copy(at, at.add(1), len - index);
                at.write(value);
            }
        }
        self.len = len + 1;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        CloneRelocation, Vector,
        testing::{self, Tracked},
    };
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_insert_at_bounds_and_middle() {
        let mut v: Vector<i32> = Vector::new();
        assert_eq!(v.insert(0, 1), Ok(0)); // into empty
        assert_eq!(v.insert(1, 3), Ok(1)); // at end
        assert_eq!(v.insert(1, 2), Ok(1)); // middle, with growth
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.insert(0, 0), Ok(0)); // front, no growth
        assert_eq!(v, [0, 1, 2, 3]);
        assert_eq!(v.insert(4, 4), Ok(4)); // end, with growth
        assert_eq!(v, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_emplace_in_place_without_growth() {
        let mut v: Vector<String> = Vector::with_capacity(8).unwrap();
        for s in ["a", "c", "d"] {
            v.push_back(s.into()).unwrap();
        }
        let p = v.as_ptr();
        assert_eq!(v.emplace(1, || "b".to_string()), Ok(1));
        assert_eq!(v.as_ptr(), p);
        assert_eq!(v, ["a".to_string(), "b".into(), "c".into(), "d".into()]);
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn test_insert_past_len_panics() {
        let mut v: Vector<i32> = [1, 2].into();
        let _ = v.insert(3, 9);
    }

    #[test]
    fn test_insert_growth_with_clone_policy() {
        testing::reset();
        let mut v: Vector<Tracked, CloneRelocation> = Vector::with_len(4).unwrap();
        v[1] = Tracked(1);
        v[2] = Tracked(2);
        v[3] = Tracked(3);
        let drops = testing::drops();

        assert_eq!(v.insert(2, Tracked(9)), Ok(2));

        assert_eq!(testing::values(&v), [0, 1, 9, 2, 3]);
        assert_eq!(v.capacity(), 8);
        assert_eq!(testing::clones(), 4);
        assert_eq!(testing::drops() - drops, 4);
    }

    #[test]
    fn test_panicking_suffix_clone_is_strong() {
        testing::reset();
        let mut v: Vector<Tracked, CloneRelocation> = Vector::with_capacity(4).unwrap();
        for i in 0..4 {
            v.push_back(Tracked(i)).unwrap();
        }
        let p = v.as_ptr();
        // Prefix [0, 1) clones fine, the suffix fails on its second value.
        testing::fail_clone_after(2);

        let res = catch_unwind(AssertUnwindSafe(|| v.insert(1, Tracked(42))));

        assert!(res.is_err());
        assert_eq!(v.as_ptr(), p);
        assert_eq!(v.capacity(), 4);
        assert_eq!(testing::values(&v), [0, 1, 2, 3]);
        // Two clones plus the inserted value were all dropped.
        assert_eq!(testing::clones(), 2);
        assert_eq!(testing::drops(), 3);
    }

    #[test]
    fn test_panicking_constructor_in_place_is_strong() {
        let mut v: Vector<i32> = Vector::with_capacity(4).unwrap();
        v.push_back(1).unwrap();
        v.push_back(2).unwrap();

        let res = catch_unwind(AssertUnwindSafe(|| v.emplace(0, || panic!("boom"))));

        assert!(res.is_err());
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_insert_then_erase_round_trip() {
        let mut v: Vector<i32> = [5, 6, 7].into();
        for i in 0..=3 {
            let at = v.insert(i, -1).unwrap();
            assert_eq!(v.erase(at), i);
            assert_eq!(v, [5, 6, 7]);
        }
    }
}

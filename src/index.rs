// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`Vector`](crate::Vector).
//!
//! `Index`/`IndexMut` accept anything a slice accepts (`usize` and every range
//! form) and behave exactly like slice indexing over the live values
//! `[0, len)`: out-of-bounds positions and inverted ranges panic, even when
//! they are still inside the allocated capacity.

// Crate imports
use crate::vec::Vector;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, R, I: SliceIndex<[T]>> Index<I> for Vector<T, R> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, R, I: SliceIndex<[T]>> IndexMut<I> for Vector<T, R> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Vector;

    #[test]
    fn test_indexing_and_ranges() {
        let mut v: Vector<i32> = [0, 1, 2, 3, 4].into();

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v, [0, 10, 20, 3, 40]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_len_panics_even_within_capacity() {
        let mut v: Vector<i32> = Vector::with_capacity(4).unwrap();
        v.push_back(1).unwrap();
        let _ = v[1];
    }

    #[test]
    #[should_panic]
    fn test_index_mut_on_empty_panics() {
        let mut v: Vector<i32> = Vector::new();
        v[0] = 1;
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v: Vector<i32> = [1, 2, 3].into();
        let _ = &v[2..1];
    }

    #[test]
    #[should_panic]
    fn test_inclusive_upper_out_of_bounds_panics() {
        let v: Vector<i32> = [1, 2, 3].into();
        let _ = &v[..=3];
    }

    #[test]
    fn test_empty_ranges_work() {
        let v: Vector<i32> = [1, 2, 3].into();
        assert_eq!(&v[1..1], &[] as &[i32]);
        assert_eq!(&v[3..3], &[] as &[i32]);
    }
}

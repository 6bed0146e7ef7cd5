// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T, R> Vector<T, R> {
    /// Views the live values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: by invariant `[0, len)` is initialized and `len <= capacity`;
        // an empty block still has a non-null, aligned pointer.
        unsafe { core::slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// Views the live values as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` gives exclusive access.
        unsafe { core::slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to slot 0.
    ///
    /// Only `[0, len)` holds values; reading further is undefined behavior.
    /// The pointer is invalidated by any operation that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns a mutable raw pointer to slot 0. See [`as_ptr`](Self::as_ptr).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }
}

#[cfg(test)]
mod tests {
    use crate::Vector;

    #[test]
    fn test_as_ptr_matches_slice() {
        let mut v: Vector<u16> = [10, 20].into();
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
        let p = v.as_mut_ptr();
        assert_eq!(p, v.as_mut_slice().as_mut_ptr());
        v.as_mut_slice()[1] = 21;
        assert_eq!(v.as_slice(), &[10, 21]);
    }

    #[test]
    fn test_empty_slice_is_valid() {
        let v: Vector<String> = Vector::new();
        assert!(v.as_slice().is_empty());
    }
}

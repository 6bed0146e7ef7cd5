// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Vector`](crate::Vector).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&Vector` and `&mut Vector` iterate as slices over the live values. The
//!   borrow checker rules out using them across anything that reallocates or
//!   shifts elements.

// Crate imports
use crate::{raw::RawStorage, vec::Vector};

// Core imports
use core::{fmt, iter::FusedIterator, ptr};

/// Owned iterator returned by `Vector::into_iter()`.
///
/// Takes over the vector's block. Values not yet yielded are dropped, and the
/// block freed, when the iterator is dropped.
pub struct IntoIter<T> {
    storage: RawStorage<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The values not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is the live remainder.
        unsafe {
            core::slice::from_raw_parts(self.storage.address_of(self.front), self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: slot `i` was live and is now outside `[front, back)`.
        Some(unsafe { self.storage.slot(i).assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot `back` was live and is now outside `[front, back)`.
        Some(unsafe { self.storage.slot(self.back).assume_init_read() })
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest = ptr::slice_from_raw_parts_mut(self.storage.address_of(self.front), self.back - self.front);
        // SAFETY: `[front, back)` holds the values nobody has taken.
        unsafe { ptr::drop_in_place(rest) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, R> IntoIterator for &'a Vector<T, R> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, R> IntoIterator for &'a mut Vector<T, R> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, R> IntoIterator for Vector<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // The emptied vector drops nothing and owns no block.
        self.len = 0;
        IntoIter {
            storage: self.storage.take(),
            front: 0,
            back,
        }
    }
}

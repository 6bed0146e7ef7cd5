// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::infallible, relocate::Relocate, vec::Vector};

impl<T, R: Relocate<T>> Extend<T> for Vector<T, R> {
    /// Appends every item.
    ///
    /// Room for the iterator's lower size bound is made up front with the same
    /// doubling growth as [`push_back`](Vector::push_back), so a run of short
    /// extends stays amortized `O(1)` per item.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts through
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error) if allocation
    /// fails.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        infallible(self.reserve_amortized(lower));
        for item in iter {
            infallible(self.push_back(item).map(|_| ()));
        }
    }
}

impl<T, R: Relocate<T>> FromIterator<T> for Vector<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

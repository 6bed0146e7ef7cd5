// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawStorage, vec::Vector};

impl<T, R> Vector<T, R> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::from_storage(RawStorage::new())
    }

    /// Constructs an empty vector with room for exactly `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self::from_storage(RawStorage::allocate(capacity)?))
    }
}

impl<T: Default, R> Vector<T, R> {
    /// Constructs a vector of `len` default values, with capacity exactly `len`.
    ///
    /// If a `T::default()` call panics, the values built so far are dropped and
    /// the block is freed before the panic continues.
    pub fn with_len(len: usize) -> Result<Self, Error> {
        let mut v = Self::with_capacity(len)?;
        while v.len < len {
            v.write_next(T::default());
        }
        Ok(v)
    }
}

impl<T, R> Default for Vector<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

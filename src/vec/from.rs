// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, infallible},
    vec::Vector,
};

impl<T, R, const N: usize> From<[T; N]> for Vector<T, R> {
    /// Moves the array into a vector with capacity exactly `N`.
    fn from(src: [T; N]) -> Self {
        let mut v = infallible(Self::with_capacity(N));
        for value in src {
            v.write_next(value);
        }
        v
    }
}

impl<T: Clone, R> TryFrom<&[T]> for Vector<T, R> {
    type Error = Error;

    /// Clones `src` into a vector with capacity exactly `src.len()`.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::with_capacity(src.len())?;
        for value in src {
            v.write_next(value.clone());
        }
        Ok(v)
    }
}

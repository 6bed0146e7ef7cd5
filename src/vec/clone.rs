// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, infallible},
    vec::Vector,
};

impl<T: Clone, R> Vector<T, R> {
    /// Returns a deep copy with capacity exactly `len()`.
    ///
    /// If a clone panics, the copies made so far are dropped and the new block
    /// is freed; `self` is never touched.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut copy = Self::with_capacity(self.len)?;
        for value in self.iter() {
            copy.write_next(value.clone());
        }
        Ok(copy)
    }

    /// Makes `self` a copy of `other`, reusing the current block when it is
    /// large enough.
    ///
    /// - If `other.len() > capacity()`, a full copy is built first and swapped
    ///   in. Failure of any kind leaves `self` unchanged.
    /// - Otherwise the overlapping prefix is updated with
    ///   [`Clone::clone_from`], then the excess tail is dropped or the missing
    ///   tail is cloned into free slots. No allocation happens. If a clone
    ///   panics, `self` stays valid with a correct `len`, but which values were
    ///   already replaced is unspecified.
    pub fn assign_from(&mut self, other: &Self) -> Result<(), Error> {
        if other.len > self.capacity() {
            let mut copy = other.try_clone()?;
            self.swap_contents(&mut copy);
            return Ok(());
        }

        let common = self.len.min(other.len);
        for (dst, src) in self.as_mut_slice()[..common].iter_mut().zip(&other[..common]) {
            dst.clone_from(src);
        }
        if other.len < self.len {
            self.truncate(other.len);
        } else {
            for value in &other[self.len..] {
                self.write_next(value.clone());
            }
        }
        Ok(())
    }
}

impl<T: Clone, R> Clone for Vector<T, R> {
    fn clone(&self) -> Self {
        infallible(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        infallible(self.assign_from(source))
    }
}

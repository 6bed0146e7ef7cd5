// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::RawStorage,
    relocate::Relocate,
    vec::Vector,
};

// External imports - log
use log::trace;

impl<T, R: Relocate<T>> Vector<T, R> {
    /// Ensures `capacity() >= new_capacity`.
    ///
    /// A no-op when the current block is already big enough; otherwise
    /// allocates a block of exactly `new_capacity` and relocates every live
    /// value into it with the policy `R`.
    ///
    /// Returns an [`Error`] and leaves the vector unchanged if allocation fails.
    /// With [`CloneRelocation`](crate::CloneRelocation), a panicking clone also
    /// leaves the vector unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let mut block = RawStorage::allocate(new_capacity)?;
        // SAFETY: `[0, len)` is live, the new block has room for at least `len`
        // values and is a different allocation.
        unsafe { R::transfer(self.storage.as_ptr(), block.as_mut_ptr(), self.len) };
        self.install(block);
        Ok(())
    }

    /// Capacity to grow to when the block is full: `0 -> 1`, otherwise doubled.
    pub(crate) fn grown_capacity(&self) -> Result<usize, Error> {
        match self.capacity() {
            0 => Ok(1),
            cap => cap.checked_mul(2).ok_or(Error::CapacityOverflow),
        }
    }

    /// Makes room for `additional` more values, growing geometrically.
    ///
    /// Unlike [`reserve`](Self::reserve), a block that is too small is
    /// replaced by one of at least [`grown_capacity`](Self::grown_capacity),
    /// so repeated small requests relocate only `O(log n)` times.
    pub(crate) fn reserve_amortized(&mut self, additional: usize) -> Result<(), Error> {
        let required = self.len.checked_add(additional).ok_or(Error::CapacityOverflow)?;
        if required <= self.capacity() {
            return Ok(());
        }
        self.reserve(required.max(self.grown_capacity()?))
    }

    /// Switches to `block`, whose `[0, len)` already holds the transferred
    /// values, and retires the originals left in the old block.
    pub(crate) fn install(&mut self, mut block: RawStorage<T>) {
        trace!(
            "relocating {} values: capacity {} -> {} ({:?})",
            self.len,
            self.capacity(),
            block.capacity(),
            R::KIND
        );
        self.storage.swap(&mut block);
        // SAFETY: `block` now owns the old allocation, whose `[0, len)` was
        // fully transferred and is not referenced by `self` any more.
        unsafe { R::release(block.as_mut_ptr(), self.len) };
    }
}

// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::RawStorage,
    relocate::{InitGuard, Relocate},
    vec::Vector,
};

impl<T, R> Vector<T, R> {
    /// Writes `value` into the first free slot and counts it as live.
    ///
    /// # Panics
    ///
    /// Panics if there is no free slot.
    #[inline]
    #[track_caller]
    pub(crate) fn write_next(&mut self, value: T) {
        self.storage.slot_mut(self.len).write(value);
        self.len += 1;
    }
}

impl<T, R: Relocate<T>> Vector<T, R> {
    /// Appends `value`. See [`emplace_back`](Self::emplace_back).
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<&mut T, Error> {
        self.emplace_back(|| value)
    }

    /// Constructs a value with `make` directly at the end of the vector and
    /// returns a reference to it.
    ///
    /// When the vector is full, a block of twice the capacity (or 1) is
    /// allocated, the new value is constructed there first and only then are
    /// the existing values relocated. So if `make` panics, or a relocation
    /// clone panics, the vector is left exactly as it was.
    ///
    /// Returns an [`Error`] without calling `make` if allocation fails.
    pub fn emplace_back<F>(&mut self, make: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        let index = self.len;
        if index == self.capacity() {
            let mut block = RawStorage::allocate(self.grown_capacity()?)?;
            block.slot_mut(index).write(make());
            let fresh = InitGuard::new(block.address_of(index), 1);
            // SAFETY: `[0, len)` is live; the new block is a distinct allocation
            // and its `[0, len)` is still uninitialized.
            unsafe { R::transfer(self.storage.as_ptr(), block.as_mut_ptr(), index) };
            fresh.disarm();
            self.install(block);
        } else {
            self.storage.slot_mut(index).write(make());
        }
        self.len += 1;
        // SAFETY: slot `index` was initialized above and is now part of `[0, len)`.
        Ok(unsafe { self.storage.slot_mut(index).assume_init_mut() })
    }
}

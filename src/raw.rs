// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Untyped, uninitialized backing storage.
//!
//! [`RawStorage<T>`] owns a heap block with room for exactly `capacity` values
//! of `T` and nothing more: it never constructs, reads or drops a `T`. Which
//! slots hold live values is the owner's business.

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    alloc::Layout,
    fmt,
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ptr::NonNull,
};

/// A raw block of memory sized for `capacity` values of `T`.
///
/// Invariants:
///
/// - when `capacity > 0` and `T` is not zero-sized, `ptr` points to a block
///   obtained from the global allocator with `Layout::array::<T>(capacity)`;
/// - otherwise `ptr` is dangling and nothing is owned;
/// - no slot is assumed initialized.
///
/// Dropping the storage releases the block without running any element
/// destructor. The type is deliberately not `Clone`: copying bytes without
/// knowing which slots are live has no meaning.
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawStorage<T>` uniquely owns its block, like `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: shared access only hands out `&MaybeUninit<T>` and raw pointers.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    /// Returns empty storage (capacity 0). Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Reserves uninitialized memory for exactly `capacity` values of `T`.
    ///
    /// No allocator call is made when `capacity == 0` or `T` is zero-sized.
    ///
    /// Returns [`Error::CapacityOverflow`] if the block size does not fit in
    /// `isize`, and [`Error::AllocFailed`] if the allocator returns null.
    pub fn allocate(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 || mem::size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _marker: PhantomData,
            });
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)?;

        // SAFETY: `capacity > 0` and `T` is not zero-sized, so `layout` has a
        // non-zero size.
        let raw = unsafe { alloc::alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or_else(|| Error::alloc_failed(layout))?;

        Ok(Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        })
    }

    /// Releases the block and resets to empty storage.
    ///
    /// Never drops elements; any value still living in a slot is leaked.
    /// A no-op on empty storage.
    pub fn deallocate(&mut self) {
        if let Some(layout) = self.layout() {
            // SAFETY: `layout()` only returns `Some` for a block we allocated
            // with exactly this layout, and it has not been freed yet.
            unsafe { alloc::alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Number of values the block can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the address of slot `offset`.
    ///
    /// `offset == capacity` is accepted and yields the one-past-end address,
    /// which may be compared against but never dereferenced.
    ///
    /// # Panics
    ///
    /// Panics if `offset > capacity`.
    #[inline]
    #[track_caller]
    pub fn address_of(&self, offset: usize) -> *mut T {
        assert!(
            offset <= self.cap,
            "slot offset {offset} is past capacity {}",
            self.cap
        );
        // SAFETY: `offset <= cap` keeps the result inside the block or one past
        // its end.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Returns slot `offset` as possibly-uninitialized memory.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= capacity`.
    #[inline]
    #[track_caller]
    pub fn slot(&self, offset: usize) -> &MaybeUninit<T> {
        assert!(
            offset < self.cap,
            "slot offset {offset} out of range for capacity {}",
            self.cap
        );
        // SAFETY: the slot lies inside the owned block, and `MaybeUninit<T>`
        // makes no claim about its contents.
        unsafe { &*self.ptr.as_ptr().add(offset).cast::<MaybeUninit<T>>() }
    }

    /// Mutable counterpart of [`slot`](Self::slot).
    ///
    /// # Panics
    ///
    /// Panics if `offset >= capacity`.
    #[inline]
    #[track_caller]
    pub fn slot_mut(&mut self, offset: usize) -> &mut MaybeUninit<T> {
        assert!(
            offset < self.cap,
            "slot offset {offset} out of range for capacity {}",
            self.cap
        );
        // SAFETY: as in `slot`, and `&mut self` gives exclusive access.
        unsafe { &mut *self.ptr.as_ptr().add(offset).cast::<MaybeUninit<T>>() }
    }

    /// Pointer to slot 0.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to slot 0.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Exchanges blocks with `other` in O(1). No element is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }

    /// Moves the block out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn layout(&self) -> Option<Layout> {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return None;
        }
        // Already validated by `allocate`.
        Layout::array::<T>(self.cap).ok()
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        self.deallocate();
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("ptr", &self.ptr)
            .field("capacity", &self.cap)
            .finish()
    }
}

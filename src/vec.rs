// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Vector` type and its inherent API.
//!
//! `Vector<T, R>` pairs a [`RawStorage<T>`] with a live length. The inherent
//! API is split by operation family across the submodules below; this file
//! holds the type itself, the accessors, and the slice-like trait impls.

mod clone;
mod extend;
mod from;
mod insert;
mod new;
mod push;
mod remove;
mod reserve;
mod resize;
mod slice;

// Crate imports
use crate::{raw::RawStorage, relocate::MoveRelocation};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, contiguous vector on raw uninitialized storage.
///
/// # Layout and invariants
///
/// - `storage` owns a block with room for `capacity()` values;
/// - `0 <= len <= capacity()`;
/// - slots `[0, len)` hold live values, slots `[len, capacity)` are raw
///   memory and are never read as `T`.
///
/// Dropping a `Vector` drops its `len` live values and then frees the block.
///
/// # Relocation policy
///
/// `R` selects how live values reach a new block when the vector grows:
/// [`MoveRelocation`] (default) or [`CloneRelocation`](crate::CloneRelocation).
/// Growing operations require `R: Relocate<T>`; everything else works for any
/// `R`.
///
/// # Growth
///
/// [`push_back`](Self::push_back), [`emplace_back`](Self::emplace_back),
/// [`insert`](Self::insert) and [`emplace`](Self::emplace) double the
/// capacity when full (`0 -> 1 -> 2 -> 4 ...`). [`reserve`](Self::reserve) and
/// [`resize`](Self::resize) allocate exactly what they are asked for. Capacity
/// never shrinks.
///
/// # Element bounds
///
/// | operation | bound |
/// |---|---|
/// | `push_back`, `emplace_back`, `insert`, `emplace`, `erase`, `pop_back`, `reserve` | none |
/// | `with_len`, `resize` | `T: Default` |
/// | `try_clone`, `assign_from`, `Clone` | `T: Clone` |
///
/// # Examples
///
/// ```rust
/// use advanced_vector::Vector;
///
/// let mut v: Vector<String> = Vector::new();
/// v.push_back("a".to_string())?;
/// v.emplace_back(|| "b".repeat(2))?;
/// assert_eq!(v.len(), 2);
/// assert_eq!(v[1], "bb");
/// # Ok::<(), advanced_vector::Error>(())
/// ```
pub struct Vector<T, R = MoveRelocation> {
    pub(crate) storage: RawStorage<T>,
    pub(crate) len: usize,
    _policy: PhantomData<fn() -> R>,
}

impl<T, R> Vector<T, R> {
    pub(crate) const fn from_storage(storage: RawStorage<T>) -> Self {
        Self {
            storage,
            len: 0,
            _policy: PhantomData,
        }
    }

    /// Returns the number of live values.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of values the current block can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Iterates over the live values.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the live values.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first value, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last value, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first value mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last value mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Exchanges contents with `other` in O(1). No value is touched.
    #[inline]
    pub fn swap_contents(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the whole contents out in O(1), leaving `self` empty with
    /// capacity 0.
    ///
    /// Move-assignment is `dst = src.take()`: the old contents of `dst` are
    /// dropped and no transferred value is touched.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T, R> Drop for Vector<T, R> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is live and is never used again.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
        // `storage` frees the block afterwards.
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Vector<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, R> PartialEq for Vector<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, R> Eq for Vector<T, R> {}
impl<T: PartialEq, R> PartialEq<[T]> for Vector<T, R> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, R, const N: usize> PartialEq<[T; N]> for Vector<T, R> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Ord, R> Ord for Vector<T, R> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, R> PartialOrd for Vector<T, R> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, R> Hash for Vector<T, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, R> Deref for Vector<T, R> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, R> DerefMut for Vector<T, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, R> AsRef<[T]> for Vector<T, R> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, R> AsMut<[T]> for Vector<T, R> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, R> Borrow<[T]> for Vector<T, R> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, R> BorrowMut<[T]> for Vector<T, R> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relocation policies: how live values travel to a freshly allocated block.
//!
//! A [`Vector<T, R>`](crate::Vector) chooses its policy `R` at compile time:
//!
//! - [`MoveRelocation`] (the default) transfers values bitwise. Rust moves
//!   cannot fail, so this is always safe to use speculatively and is the only
//!   choice for types that are not `Clone`.
//! - [`CloneRelocation`] clones every value into the new block first and only
//!   then drops the originals. If any clone panics, the partial copies are
//!   dropped and the original block is left exactly as it was. Use it for
//!   element types that must be relocated through `Clone`, for example values
//!   whose clone re-registers their identity somewhere else.
//!
//! `CloneRelocation` is only a valid policy for `T: Clone`, so the choice is a
//! capability check enforced by the type system rather than a runtime retry.

// Core imports
use core::{mem, ptr};

/// Which relocation strategy a policy implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelocationKind {
    /// Values are moved; the originals are logically gone after transfer.
    Move,
    /// Values are cloned; the originals are dropped once every clone succeeded.
    Clone,
}

/// A strategy for relocating live values between storage blocks.
///
/// Relocation happens in two steps so a container can stage several transfers
/// (for example around a newly inserted value) before committing:
///
/// 1. [`transfer`](Self::transfer) initializes the destination range;
/// 2. [`release`](Self::release) retires the source range once every transfer
///    has succeeded.
///
/// # Safety
///
/// Implementations must uphold the following:
///
/// - on normal return from `transfer`, `dst[..count]` holds `count`
///   initialized values equal to the sources, in order;
/// - if `transfer` unwinds, `src[..count]` is untouched and still live, and no
///   value is left alive in `dst[..count]`;
/// - after `transfer` followed by `release`, the source range holds no live
///   value that still needs dropping.
pub unsafe trait Relocate<T> {
    /// The strategy this policy implements.
    const KIND: RelocationKind;

    /// Initializes `dst[..count]` from the live values in `src[..count]`.
    ///
    /// # Safety
    ///
    /// `src[..count]` must be initialized and `dst[..count]` must be valid for
    /// writes, uninitialized, and must not overlap the source.
    unsafe fn transfer(src: *const T, dst: *mut T, count: usize);

    /// Retires `src[..count]` after a successful [`transfer`](Self::transfer).
    ///
    /// # Safety
    ///
    /// Must be called exactly once, only on a range that was fully transferred.
    /// The range must not be used as live values afterwards.
    unsafe fn release(src: *mut T, count: usize);
}

/// Bitwise relocation. Cannot fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveRelocation;

// SAFETY: a non-overlapping bitwise copy moves every value, and a move leaves
// nothing behind to drop.
unsafe impl<T> Relocate<T> for MoveRelocation {
    const KIND: RelocationKind = RelocationKind::Move;

    #[inline]
    unsafe fn transfer(src: *const T, dst: *mut T, count: usize) {
        // SAFETY: guaranteed by the caller.
        unsafe { ptr::copy_nonoverlapping(src, dst, count) };
    }

    #[inline]
    unsafe fn release(_src: *mut T, _count: usize) {}
}

/// Clone-then-drop relocation, for `T: Clone`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CloneRelocation;

// SAFETY: `transfer` never touches the source, and `InitGuard` drops every
// clone already written if a later clone unwinds. `release` drops the
// originals exactly once.
unsafe impl<T: Clone> Relocate<T> for CloneRelocation {
    const KIND: RelocationKind = RelocationKind::Clone;

    unsafe fn transfer(src: *const T, dst: *mut T, count: usize) {
        let mut guard = InitGuard::new(dst, 0);
        for i in 0..count {
            // SAFETY: `i < count`; the source is live and the destination slot
            // is valid for writes and still uninitialized.
            unsafe { dst.add(i).write((*src.add(i)).clone()) };
            guard.len += 1;
        }
        guard.disarm();
    }

    unsafe fn release(src: *mut T, count: usize) {
        // SAFETY: the caller hands us a fully live range that nobody else uses.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(src, count)) };
    }
}

/// Drops `len` initialized values starting at `start` unless disarmed.
///
/// Staged construction keeps one of these alive so that an unwind in a later
/// step cleans up what earlier steps already built.
pub(crate) struct InitGuard<T> {
    start: *mut T,
    pub(crate) len: usize,
}

impl<T> InitGuard<T> {
    #[inline]
    pub(crate) fn new(start: *mut T, len: usize) -> Self {
        Self { start, len }
    }

    /// Hands ownership of the guarded values to the caller.
    #[inline]
    pub(crate) fn disarm(self) {
        mem::forget(self);
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        // SAFETY: whoever armed the guard guarantees `start[..len]` is live and
        // owned by nobody else while the guard is armed.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.len)) };
    }
}

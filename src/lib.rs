// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `advanced-vector`
//!
//! A `no_std` (+ `alloc`), growable, contiguous vector built from two layers:
//!
//! - [`RawStorage<T>`] owns an uninitialized heap block sized for exactly
//!   `capacity` values of `T`. It allocates and frees memory and knows nothing
//!   about which slots are live.
//! - [`Vector<T, R>`] owns one `RawStorage<T>` plus a length `len`. Slots
//!   `[0, len)` are live; `[len, capacity)` are raw memory. Every operation is
//!   a combination of allocation requests and explicit writes, reads and drops
//!   of individual slots.
//!
//! ## Relocation policies
//!
//! When a vector outgrows its block, its live values are relocated into a new
//! one. The strategy is the type parameter `R`:
//!
//! - [`MoveRelocation`] (default): bitwise moves. Cannot fail and works for
//!   every `T`, including move-only types.
//! - [`CloneRelocation`]: clone everything first, drop the originals after.
//!   Requires `T: Clone`. A panicking clone leaves the vector untouched.
//!
//! See the [`relocate`] module for details.
//!
//! ## Failure model
//!
//! - **Allocation failures** are returned as [`Error`] from every operation that
//!   may allocate (`with_len`, `with_capacity`, `try_clone`, `assign_from`,
//!   `reserve`, `resize`, `push_back`, `emplace_back`, `insert`, `emplace`).
//!   On `Err` the vector is unchanged.
//! - **Element failures** (a panicking `Default`, `Clone` or constructor
//!   closure) unwind. Construction, cloning, `reserve`, `push_back`/`emplace_back`
//!   and `insert`/`emplace` give the strong guarantee: the vector is exactly
//!   as before and every value built along the way has been dropped.
//!   In-place `assign_from` and growing `resize` give the basic guarantee:
//!   `len` is correct and every live slot is valid, contents are unspecified.
//! - **Precondition violations** (index `>= len`, `pop_back` on an empty
//!   vector, erasing at `len`, inserting past `len`) always panic, exactly like
//!   slice indexing.
//!
//! ## Example
//!
//! ```rust
//! use advanced_vector::Vector;
//!
//! let mut v: Vector<i32> = Vector::new();
//! v.push_back(1)?;
//! v.push_back(2)?;
//! v.push_back(3)?;
//! v.insert(1, 9)?;
//! assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
//!
//! v.erase(2);
//! v.pop_back();
//! assert_eq!(v.as_slice(), &[1, 9]);
//! # Ok::<(), advanced_vector::Error>(())
//! ```
//!
//! ## Logging
//!
//! Reallocations are reported through the [`log`](https://docs.rs/log) facade at
//! `trace` level. Nothing is printed unless the application installs a logger.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod raw;
pub mod relocate;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use raw::RawStorage;
pub use relocate::{CloneRelocation, MoveRelocation, Relocate, RelocationKind};
pub use vec::Vector;

// This file is part of advanced-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`Vector`](crate::Vector) and [`RawStorage`](crate::RawStorage).
//!
//! Only allocation problems are reported as errors. Element failures (a
//! panicking `Default`, `Clone` or constructor closure) unwind, and broken
//! preconditions (bad index, popping an empty vector) panic.

// Core imports
use core::{alloc::Layout, error::Error as CoreError, fmt};

/// Errors returned by operations that may allocate.
///
/// Every operation returning this error leaves the container exactly as it was
/// before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity does not fit in the address space
    /// (`capacity * size_of::<T>()` exceeds `isize::MAX`).
    CapacityOverflow,
    /// The global allocator could not satisfy a request of this layout.
    AllocFailed {
        /// Requested block size in bytes.
        size: usize,
        /// Requested block alignment in bytes.
        align: usize,
    },
}

impl Error {
    pub(crate) fn alloc_failed(layout: Layout) -> Self {
        Self::AllocFailed {
            size: layout.size(),
            align: layout.align(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { size, align } => {
                write!(f, "memory allocation of {size} bytes (align {align}) failed")
            }
        }
    }
}

impl CoreError for Error {}

/// Unwraps the result of an allocating operation for entry points that cannot
/// return an error (`Clone`, `Extend`, `FromIterator`, ...).
///
/// Mirrors `alloc`: allocator failures go through [`handle_alloc_error`], size
/// overflows panic.
///
/// [`handle_alloc_error`]: alloc::alloc::handle_alloc_error
#[track_caller]
pub(crate) fn infallible<T>(result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(Error::CapacityOverflow) => panic!("capacity overflow"),
        Err(Error::AllocFailed { size, align }) => match Layout::from_size_align(size, align) {
            Ok(layout) => alloc::alloc::handle_alloc_error(layout),
            Err(_) => panic!("capacity overflow"),
        },
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{Error, infallible};
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::CapacityOverflow);
        assert!(s.contains("overflow"));
    }

    #[test]
    fn test_display_alloc_failed() {
        let e = Error::AllocFailed { size: 64, align: 8 };
        assert_eq!(e.to_string(), "memory allocation of 64 bytes (align 8) failed");
    }

    #[test]
    fn test_infallible_passes_ok_through() {
        assert_eq!(infallible(Ok::<_, Error>(7)), 7);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_infallible_panics_on_overflow() {
        let _: () = infallible(Err(Error::CapacityOverflow));
    }
}

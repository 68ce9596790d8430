//! Errors returned by the fallible (`try_*`) view operations.
//!
//! The panicking operations (`first`, `subrange`, `from_container`, ...) are
//! thin wrappers over their `try_*` counterparts and panic with the
//! [`Display`](core::fmt::Display) text of these errors.

use thiserror::Error;

/// A violated view contract, reported instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ViewError {
    /// A run of `actual` elements was offered to a view of fixed extent `expected`.
    #[error("extent mismatch: expected {expected} elements, found {actual}")]
    ExtentMismatch { expected: usize, actual: usize },

    /// A sub-range `[offset, offset + count)` does not fit in a view of `len` elements.
    #[error("sub-range at offset {offset} with {count} elements is out of bounds for a view of {len} elements")]
    RangeOutOfBounds {
        offset: usize,
        count: usize,
        len: usize,
    },

    /// An element index past the end of the view.
    #[error("index {index} is out of bounds for a view of {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Checks that `[offset, offset + count)` lies within `[0, len]`.
///
/// Overflow of `offset + count` counts as out of bounds.
pub(crate) fn check_range(offset: usize, count: usize, len: usize) -> Result<(), ViewError> {
    match offset.checked_add(count) {
        Some(end) if offset <= len && end <= len => Ok(()),
        _ => {
            tracing::debug!(offset, count, len, "sub-range out of bounds");
            Err(ViewError::RangeOutOfBounds { offset, count, len })
        }
    }
}

/// Like [`check_range`], but `offset` must also name an element (`offset < len`).
pub(crate) fn check_start_range(offset: usize, count: usize, len: usize) -> Result<(), ViewError> {
    if offset < len {
        check_range(offset, count, len)
    } else {
        tracing::debug!(offset, count, len, "sub-range starts past the last element");
        Err(ViewError::RangeOutOfBounds { offset, count, len })
    }
}

/// Unwraps the result of a checked operation, treating an error as a broken contract.
#[inline]
#[track_caller]
pub(crate) fn contract<T>(result: Result<T, ViewError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => contract_violation(err),
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn contract_violation(err: ViewError) -> ! {
    panic!("{err}")
}

//! Compile-time and runtime extents.
//!
//! A view's length lives in its extent type `E`:
//!
//! | Extent | Storage | `E::STATIC` |
//! |--------|---------|-------------|
//! | [`Fixed<N>`] | nothing (zero-sized) | `N` |
//! | [`Dynamic`] | one `usize` | [`DYNAMIC_EXTENT`] |
//!
//! Selecting the mode is a type-level decision, so a `View<T, Fixed<N>>` is a
//! single pointer and every bound that only depends on `N` is checked while
//! compiling.

use core::fmt;

use crate::error::ViewError;

/// Sentinel used by [`Extent::STATIC`] to mean "length known only at runtime".
///
/// It also doubles as the `count` argument of `subrange` meaning "up to the end".
pub const DYNAMIC_EXTENT: usize = usize::MAX;

mod private {
    pub trait Sealed {}
}

/// The length of a view, either baked into the type or stored alongside the pointer.
///
/// This is a sealed trait: the only implementors are [`Fixed`] and [`Dynamic`].
pub trait Extent: private::Sealed + Copy + Eq + fmt::Debug + 'static {
    /// The compile-time length, or [`DYNAMIC_EXTENT`] when it is a runtime value.
    const STATIC: usize;

    /// Whether the length is part of the type.
    const IS_FIXED: bool = Self::STATIC != DYNAMIC_EXTENT;

    /// Builds the extent for a run of `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ExtentMismatch`] when `Self` is fixed and `len`
    /// differs from its length.
    fn try_from_len(len: usize) -> Result<Self, ViewError>;

    /// Builds the extent for a run of `len` elements, panicking on a mismatch.
    #[track_caller]
    fn from_len(len: usize) -> Self {
        match Self::try_from_len(len) {
            Ok(extent) => extent,
            Err(err) => panic!("{err}"),
        }
    }

    /// The number of elements.
    fn get(self) -> usize;
}

/// An extent of exactly `N` elements, known at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fixed<const N: usize>;

impl<const N: usize> private::Sealed for Fixed<N> {}

impl<const N: usize> Extent for Fixed<N> {
    const STATIC: usize = {
        assert!(
            N != DYNAMIC_EXTENT,
            "`DYNAMIC_EXTENT` cannot be used as a fixed extent"
        );
        N
    };

    fn try_from_len(len: usize) -> Result<Self, ViewError> {
        if len == Self::STATIC {
            Ok(Fixed)
        } else {
            tracing::debug!(expected = N, actual = len, "fixed extent mismatch");
            Err(ViewError::ExtentMismatch {
                expected: N,
                actual: len,
            })
        }
    }

    #[inline(always)]
    fn get(self) -> usize {
        Self::STATIC
    }
}

/// An extent whose length is stored at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dynamic(usize);

impl private::Sealed for Dynamic {}

impl Extent for Dynamic {
    const STATIC: usize = DYNAMIC_EXTENT;

    #[inline(always)]
    fn try_from_len(len: usize) -> Result<Self, ViewError> {
        Ok(Dynamic(len))
    }

    #[inline(always)]
    fn get(self) -> usize {
        self.0
    }
}

static_assertions::assert_eq_size!(Fixed<16>, ());
static_assertions::assert_eq_size!(Dynamic, usize);

//! Runview - bounded, non-owning views of contiguous memory
//!
//! # Overview
//!
//! A view is a pointer plus an element count that never owns what it points
//! at. The count is either part of the type ([`Fixed<N>`]) or stored next to
//! the pointer ([`Dynamic`]):
//!
//! - `View<'a, T, Fixed<N>>` is one pointer wide; the compiler knows `len()`.
//! - `View<'a, T>` is two words wide, like `&[T]`.
//!
//! Both share the same interface. Sub-range operations come in two flavors:
//! runtime counts always produce a dynamic view, compile-time counts produce a
//! fixed one and are checked during the build when the source is fixed too.
//!
//! # Quick Start
//!
//! ```
//! use runview::prelude::*;
//!
//! let readings = [10, 20, 30, 40, 50];
//!
//! // Arrays keep their length in the type.
//! let view = readings.view();
//! let middle: View<'_, i32, Fixed<3>> = view.subrange_fixed::<1, 3>();
//! assert_eq!(middle, [20, 30, 40]);
//!
//! // Anything else is dynamic.
//! let mut samples = vec![1, 2, 3, 4];
//! samples.view_mut().last(2).fill(0);
//! assert_eq!(samples, [1, 2, 0, 0]);
//! ```
//!
//! # Choosing an Extent
//!
//! [`AsView`] picks the extent from what you hand it: arrays become
//! `Fixed<N>`, slices and growable containers become `Dynamic`. To pin a
//! container to a known length, go through `TryFrom` or
//! [`View::try_from_container`]:
//!
//! ```
//! use runview::{Fixed, View, ViewError};
//!
//! let packet = vec![0u8; 4];
//! let header: View<'_, u8, Fixed<4>> = View::try_from_container(&packet)?;
//! assert_eq!(header.len(), 4);
//!
//! let too_long = View::<u8, Fixed<8>>::try_from_container(&packet);
//! assert!(too_long.is_err());
//! # Ok::<(), ViewError>(())
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

pub use runview_core::{
    Contiguous, ContiguousMut, DYNAMIC_EXTENT, Dynamic, Extent, Fixed, IsView, View, ViewError,
    ViewMut,
};

/// Everything needed to build and use views.
pub mod prelude {
    pub use crate::AsView;
    pub use runview_core::{DYNAMIC_EXTENT, Dynamic, Fixed, View, ViewMut};
}

/// Borrow a value as a view, picking the extent from the value's type.
///
/// | Source             | Extent     |
/// |--------------------|------------|
/// | `[T; N]`           | `Fixed<N>` |
/// | `[T]`, `Vec<T>`    | `Dynamic`  |
/// | `Box<[T]>`         | `Dynamic`  |
/// | `SmallVec<A>`      | `Dynamic`  |
///
/// Your own [`Contiguous`] types can use [`View::from_container`] directly,
/// or implement this trait for the same ergonomics.
pub trait AsView {
    type Item;
    type Extent: Extent;

    fn view(&self) -> View<'_, Self::Item, Self::Extent>;

    fn view_mut(&mut self) -> ViewMut<'_, Self::Item, Self::Extent>;
}

impl<T, const N: usize> AsView for [T; N] {
    type Item = T;
    type Extent = Fixed<N>;

    fn view(&self) -> View<'_, T, Fixed<N>> {
        View::from_array(self)
    }

    fn view_mut(&mut self) -> ViewMut<'_, T, Fixed<N>> {
        ViewMut::from_array(self)
    }
}

impl<T> AsView for [T] {
    type Item = T;
    type Extent = Dynamic;

    fn view(&self) -> View<'_, T> {
        View::from_container(self)
    }

    fn view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::from_container(self)
    }
}

#[cfg(feature = "alloc")]
impl<T> AsView for Vec<T> {
    type Item = T;
    type Extent = Dynamic;

    fn view(&self) -> View<'_, T> {
        View::from_container(self)
    }

    fn view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::from_container(self)
    }
}

#[cfg(feature = "alloc")]
impl<T> AsView for Box<[T]> {
    type Item = T;
    type Extent = Dynamic;

    fn view(&self) -> View<'_, T> {
        View::from_container(self)
    }

    fn view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::from_container(self)
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> AsView for smallvec::SmallVec<A> {
    type Item = A::Item;
    type Extent = Dynamic;

    fn view(&self) -> View<'_, A::Item> {
        View::from_container(self)
    }

    fn view_mut(&mut self) -> ViewMut<'_, A::Item> {
        ViewMut::from_container(self)
    }
}

//! Conversions into and between views.
//!
//! Widening conversions are `From`:
//!
//! - `&[T; N]` into a fixed or a dynamic view, `&[T]`/`&Vec<T>` into a dynamic one;
//! - `ViewMut<T, E>` into `View<T, E>` (writable to read-only);
//! - any `Fixed<N>` view into its `Dynamic` counterpart.
//!
//! Narrowing conversions, which need a length check, are `TryFrom` and fail
//! with [`ViewError::ExtentMismatch`].

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{
    error::ViewError,
    extent::{Dynamic, Extent, Fixed},
    view::View,
    view_mut::ViewMut,
};

// --- Arrays ---

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T, Fixed<N>> {
    fn from(array: &'a [T; N]) -> Self {
        View::from_array(array)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T, Dynamic> {
    fn from(array: &'a [T; N]) -> Self {
        View::from_array(array).into_dynamic()
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for ViewMut<'a, T, Fixed<N>> {
    fn from(array: &'a mut [T; N]) -> Self {
        ViewMut::from_array(array)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for ViewMut<'a, T, Dynamic> {
    fn from(array: &'a mut [T; N]) -> Self {
        ViewMut::from_array(array).into_dynamic()
    }
}

// --- Slices and vectors ---

impl<'a, T> From<&'a [T]> for View<'a, T, Dynamic> {
    fn from(slice: &'a [T]) -> Self {
        View::from_container(slice)
    }
}

impl<'a, T> From<&'a mut [T]> for ViewMut<'a, T, Dynamic> {
    fn from(slice: &'a mut [T]) -> Self {
        ViewMut::from_container(slice)
    }
}

impl<'a, T, const N: usize> TryFrom<&'a [T]> for View<'a, T, Fixed<N>> {
    type Error = ViewError;

    fn try_from(slice: &'a [T]) -> Result<Self, ViewError> {
        View::try_from_container(slice)
    }
}

impl<'a, T, const N: usize> TryFrom<&'a mut [T]> for ViewMut<'a, T, Fixed<N>> {
    type Error = ViewError;

    fn try_from(slice: &'a mut [T]) -> Result<Self, ViewError> {
        ViewMut::try_from_container(slice)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> From<&'a Vec<T>> for View<'a, T, Dynamic> {
    fn from(vec: &'a Vec<T>) -> Self {
        View::from_container(vec)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> From<&'a mut Vec<T>> for ViewMut<'a, T, Dynamic> {
    fn from(vec: &'a mut Vec<T>) -> Self {
        ViewMut::from_container(vec)
    }
}

impl<'a, T, E: Extent> From<View<'a, T, E>> for &'a [T] {
    fn from(view: View<'a, T, E>) -> Self {
        view.as_slice()
    }
}

// --- Between views ---

impl<'a, T, E: Extent> From<ViewMut<'a, T, E>> for View<'a, T, E> {
    fn from(view: ViewMut<'a, T, E>) -> Self {
        view.into_view()
    }
}

impl<'a, T, const N: usize> From<View<'a, T, Fixed<N>>> for View<'a, T, Dynamic> {
    fn from(view: View<'a, T, Fixed<N>>) -> Self {
        view.into_dynamic()
    }
}

impl<'a, T, const N: usize> From<ViewMut<'a, T, Fixed<N>>> for ViewMut<'a, T, Dynamic> {
    fn from(view: ViewMut<'a, T, Fixed<N>>) -> Self {
        view.into_dynamic()
    }
}

impl<'a, T, const N: usize> From<ViewMut<'a, T, Fixed<N>>> for View<'a, T, Dynamic> {
    fn from(view: ViewMut<'a, T, Fixed<N>>) -> Self {
        view.into_view().into_dynamic()
    }
}

impl<'a, T, const N: usize> TryFrom<View<'a, T, Dynamic>> for View<'a, T, Fixed<N>> {
    type Error = ViewError;

    fn try_from(view: View<'a, T, Dynamic>) -> Result<Self, ViewError> {
        view.try_into_fixed()
    }
}

impl<'a, T, const N: usize> TryFrom<ViewMut<'a, T, Dynamic>> for ViewMut<'a, T, Fixed<N>> {
    type Error = ViewError;

    fn try_from(view: ViewMut<'a, T, Dynamic>) -> Result<Self, ViewError> {
        view.try_into_fixed()
    }
}

//! Structural capabilities for "things a view can be built from".
//!
//! [`Contiguous`] is the duck-typed half: anything that can hand out the
//! address of its first element and an element count. Implement it for your
//! own buffer type and [`View::from_container`] works with it, no wrapper
//! needed.
//!
//! Arrays and views deliberately do not implement it. Arrays carry their
//! length in the type and get fixed-extent conversions of their own; views
//! are recognized by the sealed [`IsView`] trait instead, so a view is never
//! treated as an arbitrary container.

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

use crate::{Extent, View, ViewMut};

/// A container storing its elements contiguously in memory.
///
/// # Safety
///
/// `as_ptr()` must point to `len()` initialized, contiguous elements that
/// stay valid and unmoved for as long as the container is borrowed.
pub unsafe trait Contiguous {
    type Item;

    /// Address of the first element.
    fn as_ptr(&self) -> *const Self::Item;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`Contiguous`] container that also hands out a mutable address.
///
/// # Safety
///
/// Same as [`Contiguous`]; additionally the elements must be writable
/// through `as_mut_ptr()` while the container is mutably borrowed.
pub unsafe trait ContiguousMut: Contiguous {
    fn as_mut_ptr(&mut self) -> *mut Self::Item;
}

unsafe impl<T> Contiguous for [T] {
    type Item = T;

    fn as_ptr(&self) -> *const T {
        <[T]>::as_ptr(self)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

unsafe impl<T> ContiguousMut for [T] {
    fn as_mut_ptr(&mut self) -> *mut T {
        <[T]>::as_mut_ptr(self)
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T> Contiguous for Vec<T> {
    type Item = T;

    fn as_ptr(&self) -> *const T {
        Vec::as_ptr(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T> ContiguousMut for Vec<T> {
    fn as_mut_ptr(&mut self) -> *mut T {
        Vec::as_mut_ptr(self)
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T> Contiguous for Box<[T]> {
    type Item = T;

    fn as_ptr(&self) -> *const T {
        <[T]>::as_ptr(self)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T> ContiguousMut for Box<[T]> {
    fn as_mut_ptr(&mut self) -> *mut T {
        <[T]>::as_mut_ptr(self)
    }
}

#[cfg(feature = "smallvec")]
unsafe impl<A: smallvec::Array> Contiguous for smallvec::SmallVec<A> {
    type Item = A::Item;

    fn as_ptr(&self) -> *const A::Item {
        smallvec::SmallVec::as_ptr(self)
    }

    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }
}

#[cfg(feature = "smallvec")]
unsafe impl<A: smallvec::Array> ContiguousMut for smallvec::SmallVec<A> {
    fn as_mut_ptr(&mut self) -> *mut A::Item {
        smallvec::SmallVec::as_mut_ptr(self)
    }
}

mod private {
    pub trait Sealed {}
}

/// Implemented by [`View`] and [`ViewMut`] only.
///
/// Generic code uses it to accept "any view, of any extent" and read it
/// through a shared [`View`].
pub trait IsView: private::Sealed {
    type Element;
    type Extent: Extent;

    fn as_view(&self) -> View<'_, Self::Element, Self::Extent>;
}

impl<T, E: Extent> private::Sealed for View<'_, T, E> {}

impl<T, E: Extent> IsView for View<'_, T, E> {
    type Element = T;
    type Extent = E;

    fn as_view(&self) -> View<'_, T, E> {
        *self
    }
}

impl<T, E: Extent> private::Sealed for ViewMut<'_, T, E> {}

impl<T, E: Extent> IsView for ViewMut<'_, T, E> {
    type Element = T;
    type Extent = E;

    fn as_view(&self) -> View<'_, T, E> {
        ViewMut::as_view(self)
    }
}

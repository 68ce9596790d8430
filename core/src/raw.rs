//! Pointer + extent pair shared by [`View`](crate::View) and [`ViewMut`](crate::ViewMut).
//!
//! `RawView` knows nothing about lifetimes or aliasing. It only does the
//! pointer arithmetic, and every method that touches memory is `unsafe`.
//!
//! The pointer is stored as `*const T` so that `RawView` is covariant in `T`,
//! like `&[T]`. `ViewMut` restores invariance with its own marker.

use core::{ptr, slice};

use crate::extent::Extent;

pub(crate) struct RawView<T, E: Extent> {
    ptr: *const T,
    extent: E,
}

impl<T, E: Extent> Clone for RawView<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, E: Extent> Copy for RawView<T, E> {}

impl<T, E: Extent> RawView<T, E> {
    #[inline(always)]
    pub(crate) const fn new(ptr: *mut T, extent: E) -> Self {
        RawView {
            ptr: ptr.cast_const(),
            extent,
        }
    }

    /// An empty view at the null address. Panics for a non-zero fixed extent.
    pub(crate) fn null() -> Self {
        RawView::new(ptr::null_mut(), E::from_len(0))
    }

    #[inline(always)]
    pub(crate) fn ptr(self) -> *mut T {
        self.ptr.cast_mut()
    }

    #[inline(always)]
    pub(crate) fn len(self) -> usize {
        self.extent.get()
    }

    /// Re-types the view with a different extent of the same length.
    #[inline(always)]
    pub(crate) fn with_extent<F: Extent>(self, extent: F) -> RawView<T, F> {
        debug_assert_eq!(extent.get(), self.len());
        RawView {
            ptr: self.ptr,
            extent,
        }
    }

    /// The view over `[offset, offset + extent.get())`.
    ///
    /// # Safety
    ///
    /// The sub-range must lie within `[0, self.len()]`.
    #[inline(always)]
    pub(crate) unsafe fn sub<F: Extent>(self, offset: usize, extent: F) -> RawView<T, F> {
        debug_assert!(offset <= self.len() && extent.get() <= self.len() - offset);
        // Offsetting by zero is always allowed, even from null.
        RawView {
            ptr: unsafe { self.ptr.add(offset) },
            extent,
        }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` elements for `'a`, and nothing
    /// may write to them while the slice lives.
    #[inline(always)]
    pub(crate) unsafe fn as_slice<'a>(self) -> &'a [T] {
        if self.len() == 0 {
            return &[];
        }
        unsafe { slice::from_raw_parts(self.ptr, self.len()) }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` elements for `'a`,
    /// and the returned slice must be the only access path to them.
    #[inline(always)]
    pub(crate) unsafe fn as_mut_slice<'a>(self) -> &'a mut [T] {
        if self.len() == 0 {
            return &mut [];
        }
        unsafe { slice::from_raw_parts_mut(self.ptr.cast_mut(), self.len()) }
    }
}

//! The exclusive, writable view.
//!
//! `ViewMut` is to [`View`] what `&mut [T]` is to `&[T]`: it is not `Copy`,
//! sub-range operations consume it (call [`reborrow`](ViewMut::reborrow)
//! first to keep the parent), and it converts into a `View` of the same
//! extent but not back.
//!
//! Range checks are shared with `View`: every operation runs on a temporary
//! shared view and rebuilds a `ViewMut` from the resulting raw pointer.

use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Deref, DerefMut, Range},
    slice,
};

use crate::{
    contiguous::{ContiguousMut, IsView},
    error::{ViewError, contract},
    extent::{Dynamic, Extent, Fixed},
    raw::RawView,
    view::View,
};

/// A non-owning, writable view of a contiguous run of `T`.
///
/// ```
/// use runview_core::ViewMut;
///
/// let mut data = vec![1, 2, 3, 4];
/// let mut view = ViewMut::<i32>::from_container(&mut data);
///
/// view.reborrow().last(2).iter_mut().for_each(|x| *x *= 10);
/// *view.front_mut() = 0;
///
/// assert_eq!(data, [0, 2, 30, 40]);
/// ```
///
/// Unlike `View`, it is invariant in `T`, as `&mut [T]` is:
///
/// ```compile_fail
/// use runview_core::ViewMut;
///
/// fn shorten<'a, 'b>(view: ViewMut<'a, &'static str>) -> ViewMut<'a, &'b str> {
///     view
/// }
/// ```
pub struct ViewMut<'a, T, E: Extent = Dynamic> {
    raw: RawView<T, E>,
    phantom: PhantomData<&'a mut T>,
}

static_assertions::assert_eq_size!(ViewMut<'static, u64, Fixed<4>>, usize);
static_assertions::assert_eq_size!(ViewMut<'static, u64, Dynamic>, [usize; 2]);
static_assertions::assert_impl_all!(ViewMut<'static, u8>: Send, Sync);
static_assertions::assert_not_impl_any!(ViewMut<'static, u8>: Copy, Clone);

impl<'a, T, E: Extent> ViewMut<'a, T, E> {
    /// The compile-time length, or [`DYNAMIC_EXTENT`](crate::DYNAMIC_EXTENT).
    pub const EXTENT: usize = E::STATIC;

    #[inline(always)]
    pub(crate) const fn from_raw(raw: RawView<T, E>) -> Self {
        ViewMut {
            raw,
            phantom: PhantomData,
        }
    }

    /// Creates a view over `count` elements starting at `ptr`.
    ///
    /// # Panics
    ///
    /// For a fixed extent, panics when `count` differs from it.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `count` contiguous,
    /// initialized elements for `'a`, and no other access path may use them
    /// during `'a`. A null `ptr` is allowed when `count` is zero.
    #[track_caller]
    pub unsafe fn from_raw_parts(ptr: *mut T, count: usize) -> Self {
        ViewMut::from_raw(RawView::new(ptr, E::from_len(count)))
    }

    /// Creates a view over `[first, last)`.
    ///
    /// # Panics
    ///
    /// Panics when `T` is zero-sized, and for a fixed extent when the
    /// distance differs from it.
    ///
    /// # Safety
    ///
    /// Both pointers must be derived from the same allocation with
    /// `first <= last`, plus the requirements of
    /// [`from_raw_parts`](ViewMut::from_raw_parts).
    #[track_caller]
    pub unsafe fn from_ptr_range(first: *mut T, last: *mut T) -> Self {
        debug_assert!(first <= last, "`first` must not come after `last`");
        let count = unsafe { last.offset_from(first) }.unsigned_abs();
        unsafe { ViewMut::from_raw_parts(first, count) }
    }

    /// Views the current contents of `container` for writing.
    ///
    /// # Panics
    ///
    /// For a fixed extent, panics when the container length differs from it.
    #[track_caller]
    pub fn from_container<C>(container: &'a mut C) -> Self
    where
        C: ContiguousMut<Item = T> + ?Sized,
    {
        contract(ViewMut::try_from_container(container))
    }

    /// # Errors
    ///
    /// [`ViewError::ExtentMismatch`] when the extent is fixed and the
    /// container length differs from it.
    pub fn try_from_container<C>(container: &'a mut C) -> Result<Self, ViewError>
    where
        C: ContiguousMut<Item = T> + ?Sized,
    {
        let extent = E::try_from_len(container.len())?;
        Ok(ViewMut::from_raw(RawView::new(container.as_mut_ptr(), extent)))
    }

    /// A shared view of the same elements, borrowing `self`.
    #[inline]
    pub fn as_view(&self) -> View<'_, T, E> {
        View::from_raw(self.raw)
    }

    /// Turns this into a shared view for the rest of `'a`.
    #[inline]
    pub fn into_view(self) -> View<'a, T, E> {
        View::from_raw(self.raw)
    }

    /// A shorter-lived `ViewMut` over the same elements.
    #[inline]
    pub fn reborrow(&mut self) -> ViewMut<'_, T, E> {
        ViewMut::from_raw(self.raw)
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.ptr()
    }

    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_view().as_ptr_range()
    }

    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        let Range { start, end } = self.as_view().as_ptr_range();
        start.cast_mut()..end.cast_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: shared access for the duration of the `&self` borrow.
        unsafe { self.raw.as_slice() }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: exclusive access for the duration of the `&mut self` borrow.
        unsafe { self.raw.as_mut_slice() }
    }

    #[inline]
    pub fn into_mut_slice(self) -> &'a mut [T] {
        // SAFETY: `self` is consumed, so the slice is the only access path for `'a`.
        unsafe { self.raw.as_mut_slice() }
    }

    /// # Panics
    ///
    /// Panics when a dynamic view is empty; rejected at compile time for `Fixed<0>`.
    #[track_caller]
    pub fn front(&self) -> &T {
        self.as_view().front()
    }

    /// # Panics
    ///
    /// Panics when a dynamic view is empty; rejected at compile time for `Fixed<0>`.
    #[track_caller]
    pub fn back(&self) -> &T {
        self.as_view().back()
    }

    /// # Panics
    ///
    /// Panics when a dynamic view is empty; rejected at compile time for `Fixed<0>`.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        const { assert!(E::STATIC != 0, "front_mut() on a view of fixed extent 0") };
        match self.as_mut_slice() {
            [first, ..] => first,
            [] => panic!("front_mut() on an empty view"),
        }
    }

    /// # Panics
    ///
    /// Panics when a dynamic view is empty; rejected at compile time for `Fixed<0>`.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        const { assert!(E::STATIC != 0, "back_mut() on a view of fixed extent 0") };
        match self.as_mut_slice() {
            [.., last] => last,
            [] => panic!("back_mut() on an empty view"),
        }
    }

    /// # Errors
    ///
    /// [`ViewError::IndexOutOfBounds`] when `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, ViewError> {
        self.as_view().try_get(index)
    }

    /// # Errors
    ///
    /// [`ViewError::IndexOutOfBounds`] when `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, ViewError> {
        let len = self.len();
        self.as_mut_slice().get_mut(index).ok_or_else(|| {
            tracing::debug!(index, len, "index out of bounds");
            ViewError::IndexOutOfBounds { index, len }
        })
    }

    /// # Safety
    ///
    /// `index` must be less than `len`. Only debug builds check it.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "index {index} out of bounds");
        unsafe { &mut *self.raw.ptr().add(index) }
    }

    /// The element at compile-time index `I`.
    #[track_caller]
    pub fn at_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(!E::IS_FIXED || I < E::STATIC, "index out of the fixed extent") };
        contract(self.try_get_mut(I))
    }

    /// # Panics
    ///
    /// Panics when `count > len`.
    #[track_caller]
    pub fn first(self, count: usize) -> ViewMut<'a, T> {
        contract(self.try_first(count))
    }

    /// # Errors
    ///
    /// [`ViewError::RangeOutOfBounds`] when `count > len`.
    pub fn try_first(self, count: usize) -> Result<ViewMut<'a, T>, ViewError> {
        let raw = self.as_view().try_first(count)?.raw();
        Ok(ViewMut::from_raw(raw))
    }

    /// # Panics
    ///
    /// Panics when `count > len`.
    #[track_caller]
    pub fn last(self, count: usize) -> ViewMut<'a, T> {
        contract(self.try_last(count))
    }

    /// # Errors
    ///
    /// [`ViewError::RangeOutOfBounds`] when `count > len`.
    pub fn try_last(self, count: usize) -> Result<ViewMut<'a, T>, ViewError> {
        let raw = self.as_view().try_last(count)?.raw();
        Ok(ViewMut::from_raw(raw))
    }

    /// The `count` elements starting at `offset`; a `count` of
    /// [`DYNAMIC_EXTENT`](crate::DYNAMIC_EXTENT) means "up to the end".
    ///
    /// # Panics
    ///
    /// Panics unless `offset <= len` and `offset + count <= len`.
    #[track_caller]
    pub fn subrange(self, offset: usize, count: usize) -> ViewMut<'a, T> {
        contract(self.try_subrange(offset, count))
    }

    /// # Errors
    ///
    /// [`ViewError::RangeOutOfBounds`] unless `offset <= len` and
    /// `offset + count <= len`.
    pub fn try_subrange(self, offset: usize, count: usize) -> Result<ViewMut<'a, T>, ViewError> {
        let raw = self.as_view().try_subrange(offset, count)?.raw();
        Ok(ViewMut::from_raw(raw))
    }

    #[track_caller]
    pub fn subrange_from(self, offset: usize) -> ViewMut<'a, T> {
        let raw = self.as_view().subrange_from(offset).raw();
        ViewMut::from_raw(raw)
    }

    /// # Safety
    ///
    /// `offset + count` must not exceed `len`. Only debug builds check it.
    #[inline]
    pub unsafe fn subrange_unchecked(self, offset: usize, count: usize) -> ViewMut<'a, T> {
        ViewMut::from_raw(unsafe { self.raw.sub(offset, Dynamic::from_len(count)) })
    }

    /// The first `COUNT` elements as a fixed-extent view.
    #[track_caller]
    pub fn first_fixed<const COUNT: usize>(self) -> ViewMut<'a, T, Fixed<COUNT>> {
        let raw = self.as_view().first_fixed::<COUNT>().raw();
        ViewMut::from_raw(raw)
    }

    /// The last `COUNT` elements as a fixed-extent view.
    #[track_caller]
    pub fn last_fixed<const COUNT: usize>(self) -> ViewMut<'a, T, Fixed<COUNT>> {
        let raw = self.as_view().last_fixed::<COUNT>().raw();
        ViewMut::from_raw(raw)
    }

    /// The `COUNT` elements starting at `OFFSET` as a fixed-extent view.
    #[track_caller]
    pub fn subrange_fixed<const OFFSET: usize, const COUNT: usize>(
        self,
    ) -> ViewMut<'a, T, Fixed<COUNT>> {
        let raw = self.as_view().subrange_fixed::<OFFSET, COUNT>().raw();
        ViewMut::from_raw(raw)
    }

    /// Splits into the disjoint views `[0, mid)` and `[mid, len)`.
    ///
    /// # Panics
    ///
    /// Panics when `mid > len`.
    #[track_caller]
    pub fn split_at(self, mid: usize) -> (ViewMut<'a, T>, ViewMut<'a, T>) {
        let (left, right) = self.as_view().split_at(mid);
        (ViewMut::from_raw(left.raw()), ViewMut::from_raw(right.raw()))
    }

    /// Forgets the compile-time extent.
    pub fn into_dynamic(self) -> ViewMut<'a, T> {
        let raw = self.as_view().into_dynamic().raw();
        ViewMut::from_raw(raw)
    }

    /// # Errors
    ///
    /// [`ViewError::ExtentMismatch`] when `len != N`.
    pub fn try_into_fixed<const N: usize>(self) -> Result<ViewMut<'a, T, Fixed<N>>, ViewError> {
        let raw = self.as_view().try_into_fixed::<N>()?.raw();
        Ok(ViewMut::from_raw(raw))
    }

    /// Copies every element of `src` into `self`.
    ///
    /// Lengths must match; when both extents are fixed this is checked at
    /// compile time.
    ///
    /// ```compile_fail
    /// use runview_core::{View, ViewMut};
    ///
    /// let mut dst = [0; 3];
    /// ViewMut::from_array(&mut dst).copy_from(&View::from_array(&[1, 2]));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when the lengths differ.
    #[track_caller]
    pub fn copy_from<V>(&mut self, src: &V)
    where
        V: IsView<Element = T>,
        T: Copy,
    {
        const {
            assert!(
                !E::IS_FIXED
                    || !<V::Extent as Extent>::IS_FIXED
                    || E::STATIC == <V::Extent as Extent>::STATIC,
                "cannot copy between views of different fixed extents"
            )
        };
        contract(self.try_copy_from(src));
    }

    /// # Errors
    ///
    /// [`ViewError::ExtentMismatch`] when the lengths differ.
    pub fn try_copy_from<V>(&mut self, src: &V) -> Result<(), ViewError>
    where
        V: IsView<Element = T>,
        T: Copy,
    {
        let src = src.as_view();
        if src.len() != self.len() {
            tracing::debug!(expected = self.len(), actual = src.len(), "copy length mismatch");
            return Err(ViewError::ExtentMismatch {
                expected: self.len(),
                actual: src.len(),
            });
        }
        self.as_mut_slice().copy_from_slice(src.as_slice());
        Ok(())
    }
}

impl<'a, T, const N: usize> ViewMut<'a, T, Fixed<N>> {
    /// Views a whole array for writing. Usable in `const fn`.
    pub const fn from_array(array: &'a mut [T; N]) -> Self {
        ViewMut::from_raw(RawView::new(array.as_mut_ptr(), Fixed))
    }
}

impl<T> Default for ViewMut<'_, T, Dynamic> {
    fn default() -> Self {
        ViewMut::from_raw(RawView::null())
    }
}

impl<T> Default for ViewMut<'_, T, Fixed<0>> {
    fn default() -> Self {
        ViewMut::from_raw(RawView::null())
    }
}

impl<T, E: Extent> Deref for ViewMut<'_, T, E> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> DerefMut for ViewMut<'_, T, E> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, E: Extent> AsRef<[T]> for ViewMut<'_, T, E> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> AsMut<[T]> for ViewMut<'_, T, E> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, E: Extent> IntoIterator for ViewMut<'a, T, E> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_mut_slice().iter_mut()
    }
}

impl<'b, T, E: Extent> IntoIterator for &'b ViewMut<'_, T, E> {
    type Item = &'b T;
    type IntoIter = slice::Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'b, T, E: Extent> IntoIterator for &'b mut ViewMut<'_, T, E> {
    type Item = &'b mut T;
    type IntoIter = slice::IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug, E: Extent> fmt::Debug for ViewMut<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, U, E, F> PartialEq<ViewMut<'_, U, F>> for ViewMut<'_, T, E>
where
    T: PartialEq<U>,
    E: Extent,
    F: Extent,
{
    fn eq(&self, other: &ViewMut<'_, U, F>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, E, F> PartialEq<View<'_, U, F>> for ViewMut<'_, T, E>
where
    T: PartialEq<U>,
    E: Extent,
    F: Extent,
{
    fn eq(&self, other: &View<'_, U, F>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, E, F> PartialEq<ViewMut<'_, U, F>> for View<'_, T, E>
where
    T: PartialEq<U>,
    E: Extent,
    F: Extent,
{
    fn eq(&self, other: &ViewMut<'_, U, F>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, E: Extent> PartialEq<[U]> for ViewMut<'_, T, E> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, E: Extent, const N: usize> PartialEq<[U; N]> for ViewMut<'_, T, E> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: Eq, E: Extent> Eq for ViewMut<'_, T, E> {}

impl<T: Hash, E: Extent> Hash for ViewMut<'_, T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// Same rules as `&mut [T]`.
unsafe impl<T: Send, E: Extent> Send for ViewMut<'_, T, E> {}
unsafe impl<T: Sync, E: Extent> Sync for ViewMut<'_, T, E> {}

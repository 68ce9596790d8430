//! The shared, read-only view.

use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Deref, Range},
    slice,
};

use crate::{
    contiguous::Contiguous,
    error::{ViewError, check_range, check_start_range, contract},
    extent::{DYNAMIC_EXTENT, Dynamic, Extent, Fixed},
    raw::RawView,
};

/// A non-owning, read-only view of a contiguous run of `T`.
///
/// The extent `E` decides where the length lives: [`Fixed<N>`] bakes it into
/// the type (the view is a single pointer), [`Dynamic`] stores it next to the
/// pointer. Both share the same methods.
///
/// `View` is `Copy` and behaves like `&'a [T]`; it also derefs to `[T]`, so
/// slice methods that are not shadowed here work as usual. Note that
/// [`first`](View::first) and [`last`](View::last) return sub-views, use
/// [`front`](View::front), [`back`](View::back) or [`get`](View::get) for
/// single elements.
///
/// ```
/// use runview_core::{Fixed, View};
///
/// let data = [10, 20, 30, 40, 50];
/// let view: View<'_, i32, Fixed<5>> = View::from_array(&data);
///
/// assert_eq!(view.first(2), [10, 20]);
/// assert_eq!(view.last(2), [40, 50]);
/// assert_eq!(view.subrange(1, 3), [20, 30, 40]);
/// assert_eq!(view.len(), 5);
/// assert!(!view.is_empty());
/// ```
pub struct View<'a, T, E: Extent = Dynamic> {
    raw: RawView<T, E>,
    phantom: PhantomData<&'a T>,
}

static_assertions::assert_eq_size!(View<'static, u64, Fixed<4>>, usize);
static_assertions::assert_eq_size!(View<'static, u64, Dynamic>, [usize; 2]);
static_assertions::assert_impl_all!(View<'static, u8>: Copy, Send, Sync);

impl<'a, T, E: Extent> View<'a, T, E> {
    /// The compile-time length, or [`DYNAMIC_EXTENT`] for dynamic views.
    ///
    /// ```
    /// use runview_core::{Fixed, View};
    ///
    /// assert_eq!(View::<u8, Fixed<3>>::EXTENT, 3);
    /// ```
    pub const EXTENT: usize = E::STATIC;

    #[inline(always)]
    pub(crate) const fn from_raw(raw: RawView<T, E>) -> Self {
        View {
            raw,
            phantom: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn raw(self) -> RawView<T, E> {
        self.raw
    }

    /// Creates a view over `count` elements starting at `ptr`.
    ///
    /// # Panics
    ///
    /// For a fixed extent, panics when `count` differs from it.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `count` contiguous, initialized
    /// elements for `'a`, and they must not be mutated during `'a`. A null
    /// `ptr` is allowed when `count` is zero.
    #[track_caller]
    pub unsafe fn from_raw_parts(ptr: *const T, count: usize) -> Self {
        View::from_raw(RawView::new(ptr.cast_mut(), E::from_len(count)))
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
    /// [`from_raw_parts`](View::from_raw_parts).
    #[track_caller]
    pub unsafe fn from_ptr_range(first: *const T, last: *const T) -> Self {
        debug_assert!(first <= last, "`first` must not come after `last`");
        let count = unsafe { last.offset_from(first) }.unsigned_abs();
        unsafe { View::from_raw_parts(first, count) }
    }

    /// Views the current contents of `container`.
    ///
    /// The view records the address and length at this point; the borrow
    /// keeps the container from reallocating while the view is alive.
    ///
    /// # Panics
    ///
    /// For a fixed extent, panics when the container length differs from it.
    #[track_caller]
    pub fn from_container<C>(container: &'a C) -> Self
    where
        C: Contiguous<Item = T> + ?Sized,
    {
        contract(View::try_from_container(container))
    }

    /// Fallible [`from_container`](View::from_container).
    ///
    /// # Errors
    ///
    /// [`ViewError::ExtentMismatch`] when the extent is fixed and the
    /// container length differs from it.
    pub fn try_from_container<C>(container: &'a C) -> Result<Self, ViewError>
    where
        C: Contiguous<Item = T> + ?Sized,
    {
        let extent = E::try_from_len(container.len())?;
        Ok(View::from_raw(RawView::new(
            container.as_ptr().cast_mut(),
            extent,
        )))
    }

    /// The base address. Null for a default-constructed view.
    #[inline]
    pub fn as_ptr(self) -> *const T {
        self.raw.ptr()
    }

    /// The `[begin, end)` pointer pair.
    pub fn as_ptr_range(self) -> Range<*const T> {
        let start = self.as_ptr();
        // SAFETY: `len` elements from `start` are in bounds by construction.
        let end = unsafe { start.add(self.len()) };
        start..end
    }

    #[inline]
    pub fn len(self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_slice(self) -> &'a [T] {
        // SAFETY: the constructors guarantee `len` readable elements for `'a`.
        unsafe { self.raw.as_slice() }
    }

    /// Iterates front to back; `.rev()` walks back to front.
    #[inline]
    pub fn iter(self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// The first element.
    ///
    /// Rejected at compile time for `Fixed<0>`.
    ///
    /// # Panics
    ///
    /// Panics when a dynamic view is empty.
    ///
    /// ```compile_fail
    /// use runview_core::{Fixed, View};
    ///
    /// let empty = View::<i32, Fixed<0>>::default();
    /// let _ = empty.front();
    /// ```
    #[track_caller]
    pub fn front(self) -> &'a T {
        const { assert!(E::STATIC != 0, "front() on a view of fixed extent 0") };
        match self.as_slice() {
            [first, ..] => first,
            [] => panic!("front() on an empty view"),
        }
    }

    /// The last element.
    ///
    /// Rejected at compile time for `Fixed<0>`.
    ///
    /// # Panics
    ///
    /// Panics when a dynamic view is empty.
    #[track_caller]
    pub fn back(self) -> &'a T {
        const { assert!(E::STATIC != 0, "back() on a view of fixed extent 0") };
        match self.as_slice() {
            [.., last] => last,
            [] => panic!("back() on an empty view"),
        }
    }

    #[inline]
    pub fn get(self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    /// Like [`get`](View::get), with the failure spelled out.
    ///
    /// # Errors
    ///
    /// [`ViewError::IndexOutOfBounds`] when `index >= len`.
    pub fn try_get(self, index: usize) -> Result<&'a T, ViewError> {
        self.get(index).ok_or_else(|| {
            tracing::debug!(index, len = self.len(), "index out of bounds");
            ViewError::IndexOutOfBounds {
                index,
                len: self.len(),
            }
        })
    }

    /// # Safety
    ///
    /// `index` must be less than `len`. Only debug builds check it.
    #[inline]
    pub unsafe fn get_unchecked(self, index: usize) -> &'a T {
        debug_assert!(index < self.len(), "index {index} out of bounds");
        unsafe { &*self.raw.ptr().add(index) }
    }

    /// The element at compile-time index `I`.
    ///
    /// ```compile_fail
    /// use runview_core::View;
    ///
    /// let view = View::from_array(&[1, 2, 3]);
    /// let _ = view.at::<3>();
    /// ```
    #[track_caller]
    pub fn at<const I: usize>(self) -> &'a T {
        const { assert!(!E::IS_FIXED || I < E::STATIC, "index out of the fixed extent") };
        contract(self.try_get(I))
    }

    /// The first `count` elements.
    ///
    /// # Panics
    ///
    /// Panics when `count > len`.
    #[track_caller]
    pub fn first(self, count: usize) -> View<'a, T> {
        contract(self.try_first(count))
    }

    /// # Errors
    ///
    /// [`ViewError::RangeOutOfBounds`] when `count > len`.
    pub fn try_first(self, count: usize) -> Result<View<'a, T>, ViewError> {
        check_range(0, count, self.len())?;
        // SAFETY: checked above.
        Ok(unsafe { self.subrange_unchecked(0, count) })
    }

    /// The last `count` elements.
    ///
    /// # Panics
    ///
    /// Panics when `count > len`.
    #[track_caller]
    pub fn last(self, count: usize) -> View<'a, T> {
        contract(self.try_last(count))
    }

    /// # Errors
    ///
    /// [`ViewError::RangeOutOfBounds`] when `count > len`.
    pub fn try_last(self, count: usize) -> Result<View<'a, T>, ViewError> {
        let len = self.len();
        let offset = len.saturating_sub(count);
        check_range(offset, count, len)?;
        // SAFETY: checked above.
        Ok(unsafe { self.subrange_unchecked(offset, count) })
    }

    /// The `count` elements starting at `offset`.
    ///
    /// A `count` of [`DYNAMIC_EXTENT`] means "up to the end".
    ///
    /// # Panics
    ///
    /// Panics unless `offset <= len` and `offset + count <= len`.
    #[track_caller]
    pub fn subrange(self, offset: usize, count: usize) -> View<'a, T> {
        contract(self.try_subrange(offset, count))
    }

    /// # Errors
    ///
    /// [`ViewError::RangeOutOfBounds`] unless `offset <= len` and
    /// `offset + count <= len`.
    pub fn try_subrange(self, offset: usize, count: usize) -> Result<View<'a, T>, ViewError> {
        let len = self.len();
        let count = if count == DYNAMIC_EXTENT {
            len.saturating_sub(offset)
        } else {
            count
        };
        check_range(offset, count, len)?;
        // SAFETY: checked above.
        Ok(unsafe { self.subrange_unchecked(offset, count) })
    }

    /// Everything from `offset` to the end.
    #[track_caller]
    pub fn subrange_from(self, offset: usize) -> View<'a, T> {
        self.subrange(offset, DYNAMIC_EXTENT)
    }

    /// # Safety
    ///
    /// `offset + count` must not exceed `len`. Only debug builds check it.
    #[inline]
    pub unsafe fn subrange_unchecked(self, offset: usize, count: usize) -> View<'a, T> {
        View::from_raw(unsafe { self.raw.sub(offset, Dynamic::from_len(count)) })
    }

    /// The first `COUNT` elements as a fixed-extent view.
    ///
    /// Checked at compile time when `self` has a fixed extent.
    ///
    /// ```compile_fail
    /// use runview_core::View;
    ///
    /// let view = View::from_array(&[1, 2, 3]);
    /// let _ = view.first_fixed::<4>();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when a dynamic view is shorter than `COUNT`.
    #[track_caller]
    pub fn first_fixed<const COUNT: usize>(self) -> View<'a, T, Fixed<COUNT>> {
        const { assert!(!E::IS_FIXED || COUNT <= E::STATIC, "count exceeds the fixed extent") };
        contract(check_range(0, COUNT, self.len()));
        View::from_raw(unsafe { self.raw.sub(0, Fixed::<COUNT>) })
    }

    /// The last `COUNT` elements as a fixed-extent view.
    ///
    /// # Panics
    ///
    /// Panics when a dynamic view is shorter than `COUNT`.
    #[track_caller]
    pub fn last_fixed<const COUNT: usize>(self) -> View<'a, T, Fixed<COUNT>> {
        const { assert!(!E::IS_FIXED || COUNT <= E::STATIC, "count exceeds the fixed extent") };
        let len = self.len();
        let offset = len.saturating_sub(COUNT);
        contract(check_range(offset, COUNT, len));
        View::from_raw(unsafe { self.raw.sub(offset, Fixed::<COUNT>) })
    }

    /// The `COUNT` elements starting at `OFFSET` as a fixed-extent view.
    ///
    /// `OFFSET` must point at an element (`OFFSET < len`), so an empty view
    /// has no valid start.
    ///
    /// ```compile_fail
    /// use runview_core::View;
    ///
    /// let view = View::from_array(&[1, 2, 3]);
    /// let _ = view.subrange_fixed::<2, 2>();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when a dynamic view does not contain the range.
    #[track_caller]
    pub fn subrange_fixed<const OFFSET: usize, const COUNT: usize>(
        self,
    ) -> View<'a, T, Fixed<COUNT>> {
        const {
            assert!(
                !E::IS_FIXED || (OFFSET < E::STATIC && COUNT <= E::STATIC - OFFSET),
                "sub-range exceeds the fixed extent"
            )
        };
        contract(check_start_range(OFFSET, COUNT, self.len()));
        View::from_raw(unsafe { self.raw.sub(OFFSET, Fixed::<COUNT>) })
    }

    /// Splits into `[0, mid)` and `[mid, len)`.
    ///
    /// # Panics
    ///
    /// Panics when `mid > len`.
    #[track_caller]
    pub fn split_at(self, mid: usize) -> (View<'a, T>, View<'a, T>) {
        let len = self.len();
        contract(check_range(mid, 0, len));
        // SAFETY: `mid <= len`.
        unsafe {
            (
                self.subrange_unchecked(0, mid),
                self.subrange_unchecked(mid, len - mid),
            )
        }
    }

    /// Forgets the compile-time extent.
    #[inline]
    pub fn into_dynamic(self) -> View<'a, T> {
        View::from_raw(self.raw.with_extent(Dynamic::from_len(self.len())))
    }

    /// Re-types the view with fixed extent `N`.
    ///
    /// # Errors
    ///
    /// [`ViewError::ExtentMismatch`] when `len != N`.
    pub fn try_into_fixed<const N: usize>(self) -> Result<View<'a, T, Fixed<N>>, ViewError> {
        let extent = Fixed::<N>::try_from_len(self.len())?;
        Ok(View::from_raw(self.raw.with_extent(extent)))
    }
}

impl<'a, T, const N: usize> View<'a, T, Fixed<N>> {
    /// Views a whole array. Usable in `const` items.
    ///
    /// ```
    /// use runview_core::{Fixed, View};
    ///
    /// const PRIMES: View<'static, u8, Fixed<4>> = View::from_array(&[2, 3, 5, 7]);
    /// assert_eq!(PRIMES.back(), &7);
    /// ```
    pub const fn from_array(array: &'a [T; N]) -> Self {
        View::from_raw(RawView::new(array.as_ptr().cast_mut(), Fixed))
    }
}

impl<T, E: Extent> Clone for View<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, E: Extent> Copy for View<'_, T, E> {}

impl<T> Default for View<'_, T, Dynamic> {
    /// An empty view at the null address.
    fn default() -> Self {
        View::from_raw(RawView::null())
    }
}

impl<T> Default for View<'_, T, Fixed<0>> {
    fn default() -> Self {
        View::from_raw(RawView::null())
    }
}

impl<T, E: Extent> Deref for View<'_, T, E> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        View::as_slice(*self)
    }
}

impl<T, E: Extent> AsRef<[T]> for View<'_, T, E> {
    fn as_ref(&self) -> &[T] {
        View::as_slice(*self)
    }
}

impl<'a, T, E: Extent> IntoIterator for View<'a, T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E: Extent> IntoIterator for &View<'a, T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        View::iter(*self)
    }
}

impl<T: fmt::Debug, E: Extent> fmt::Debug for View<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(View::iter(*self)).finish()
    }
}

impl<T, U, E, F> PartialEq<View<'_, U, F>> for View<'_, T, E>
where
    T: PartialEq<U>,
    E: Extent,
    F: Extent,
{
    fn eq(&self, other: &View<'_, U, F>) -> bool {
        View::as_slice(*self) == View::as_slice(*other)
    }
}

impl<T: PartialEq<U>, U, E: Extent> PartialEq<[U]> for View<'_, T, E> {
    fn eq(&self, other: &[U]) -> bool {
        View::as_slice(*self) == other
    }
}

impl<T: PartialEq<U>, U, E: Extent, const N: usize> PartialEq<[U; N]> for View<'_, T, E> {
    fn eq(&self, other: &[U; N]) -> bool {
        View::as_slice(*self) == &other[..]
    }
}

impl<T: Eq, E: Extent> Eq for View<'_, T, E> {}

impl<T: Hash, E: Extent> Hash for View<'_, T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        View::as_slice(*self).hash(state);
    }
}

// A `View<T>` is a `&[T]` in disguise.
unsafe impl<T: Sync, E: Extent> Send for View<'_, T, E> {}
unsafe impl<T: Sync, E: Extent> Sync for View<'_, T, E> {}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;

    // ===================
    // Construction
    // ===================

    #[test]
    fn from_array_is_fixed() {
        let data = [1, 2, 3];
        let view = View::from_array(&data);
        assert_eq!(view.len(), 3);
        assert_eq!(view.as_ptr(), data.as_ptr());
        assert_eq!(View::<i32, Fixed<3>>::EXTENT, 3);
    }

    #[test]
    fn from_raw_parts_dynamic() {
        let data = [4u8, 5, 6, 7];
        let view: View<'_, u8> = unsafe { View::from_raw_parts(data.as_ptr(), 4) };
        assert_eq!(view.len(), 4);
        assert_eq!(view.as_ptr(), data.as_ptr());
        assert_eq!(view, [4, 5, 6, 7]);
    }

    #[test]
    #[should_panic(expected = "extent mismatch: expected 4 elements, found 3")]
    fn from_raw_parts_fixed_mismatch_panics() {
        let data = [1, 2, 3];
        let _: View<'_, i32, Fixed<4>> = unsafe { View::from_raw_parts(data.as_ptr(), 3) };
    }

    #[test]
    fn from_ptr_range_counts_elements() {
        let data = [1u16, 2, 3, 4, 5];
        let range = data[1..4].as_ptr_range();
        let view: View<'_, u16> = unsafe { View::from_ptr_range(range.start, range.end) };
        assert_eq!(view, [2, 3, 4]);

        let fixed: View<'_, u16, Fixed<3>> =
            unsafe { View::from_ptr_range(range.start, range.end) };
        assert_eq!(fixed.back(), &4);
    }

    #[test]
    fn default_dynamic_is_null() {
        let view = View::<i32>::default();
        assert_eq!(view.len(), 0);
        assert!(view.is_empty());
        assert!(view.as_ptr().is_null());
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn default_fixed_zero() {
        let view = View::<i32, Fixed<0>>::default();
        assert!(view.is_empty());
        assert!(view.as_ptr().is_null());
    }

    // ===================
    // Access
    // ===================

    #[test]
    fn front_and_back() {
        let view = View::from_array(&[3, 1, 4]);
        assert_eq!(view.front(), &3);
        assert_eq!(view.back(), &4);
        assert_eq!(view.front(), view.iter().next().unwrap());
        assert_eq!(view.back(), view.iter().next_back().unwrap());
    }

    #[test]
    #[should_panic(expected = "front() on an empty view")]
    fn front_of_empty_dynamic_panics() {
        let _ = View::<i32>::default().front();
    }

    #[test]
    fn index_aliases_pointer() {
        let data = [9, 8, 7];
        let view = View::from_array(&data);
        for i in 0..view.len() {
            assert!(core::ptr::eq(&view[i], unsafe { view.as_ptr().add(i) }));
        }
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let view = View::from_array(&[1, 2]);
        let _value = view[2];
    }

    #[test]
    fn get_and_try_get() {
        let view = View::from_array(&[1, 2]);
        assert_eq!(view.get(1), Some(&2));
        assert_eq!(view.get(2), None);
        assert_eq!(
            view.try_get(5),
            Err(ViewError::IndexOutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(unsafe { view.get_unchecked(0) }, &1);
    }

    #[test]
    fn at_compile_time_index() {
        let view = View::from_array(&['a', 'b', 'c']);
        assert_eq!(view.at::<0>(), &'a');
        assert_eq!(view.at::<2>(), &'c');
    }

    #[test]
    #[should_panic(expected = "index 3 is out of bounds")]
    fn at_on_short_dynamic_panics() {
        let data = [1, 2, 3];
        let view: View<'_, i32> = View::from(&data[..]);
        let _ = view.at::<3>();
    }

    #[test]
    fn reverse_iteration() {
        let view = View::from_array(&[1, 2, 3]);
        let mut out = [0; 3];
        for (slot, value) in out.iter_mut().zip(view.iter().rev()) {
            *slot = *value;
        }
        assert_eq!(out, [3, 2, 1]);
    }

    #[test]
    fn ptr_range_spans_view() {
        let data = [1u32, 2, 3];
        let view = View::from_array(&data);
        assert_eq!(view.as_ptr_range(), data.as_ptr_range());
        assert_eq!(View::<u32>::default().as_ptr_range().start, core::ptr::null());
    }

    // ===================
    // Sub-ranges
    // ===================

    #[test]
    fn first_last_full_length() {
        let view = View::from_array(&[1, 2, 3]);
        assert_eq!(view.first(3), view);
        assert_eq!(view.last(3), view);
        assert!(view.first(0).is_empty());
        assert!(view.last(0).is_empty());
    }

    #[test]
    fn subrange_to_end_is_valid() {
        let view = View::from_array(&[1, 2, 3, 4, 5]);
        assert_eq!(view.subrange(2, 3), [3, 4, 5]);
        assert_eq!(view.subrange(5, 0), [0; 0]);
        assert_eq!(view.subrange(1, DYNAMIC_EXTENT), [2, 3, 4, 5]);
        assert_eq!(view.subrange_from(4), [5]);
    }

    #[test]
    fn try_subrange_reports_bounds() {
        crate::test_utils::init_test_logging();
        let view = View::from_array(&[1, 2, 3]);
        assert_eq!(
            view.try_subrange(2, 2),
            Err(ViewError::RangeOutOfBounds {
                offset: 2,
                count: 2,
                len: 3
            })
        );
        assert!(view.try_subrange(4, DYNAMIC_EXTENT).is_err());
        assert!(view.try_first(4).is_err());
        assert!(view.try_last(4).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn last_too_long_panics() {
        let _ = View::from_array(&[1, 2]).last(3);
    }

    #[test]
    fn fixed_subranges_keep_extent() {
        let view = View::from_array(&[10, 20, 30, 40, 50]);

        let head: View<'_, i32, Fixed<2>> = view.first_fixed::<2>();
        let tail: View<'_, i32, Fixed<2>> = view.last_fixed::<2>();
        let mid: View<'_, i32, Fixed<3>> = view.subrange_fixed::<1, 3>();

        assert_eq!(head, [10, 20]);
        assert_eq!(tail, [40, 50]);
        assert_eq!(mid, [20, 30, 40]);
        assert_eq!(View::<i32, Fixed<3>>::EXTENT, mid.len());
    }

    #[test]
    fn fixed_subranges_from_dynamic() {
        let data = [1, 2, 3, 4];
        let view: View<'_, i32> = View::from(&data[..]);
        assert_eq!(view.first_fixed::<2>(), [1, 2]);
        assert_eq!(view.last_fixed::<1>(), [4]);
        assert_eq!(view.subrange_fixed::<3, 1>(), [4]);
    }

    #[test]
    #[should_panic(
        expected = "sub-range at offset 2 with 0 elements is out of bounds for a view of 2 elements"
    )]
    fn fixed_subrange_from_short_dynamic_panics() {
        let data = [1, 2];
        let view: View<'_, i32> = View::from(&data[..]);
        let _ = view.subrange_fixed::<2, 0>();
    }

    #[test]
    fn split_at_halves() {
        let view = View::from_array(&[1, 2, 3, 4]);
        let (left, right) = view.split_at(1);
        assert_eq!(left, [1]);
        assert_eq!(right, [2, 3, 4]);
    }

    #[test]
    fn fixed_dynamic_round_trip() {
        let view = View::from_array(&[1, 2, 3]);
        let dynamic = view.into_dynamic();
        assert_eq!(View::<i32>::EXTENT, DYNAMIC_EXTENT);
        assert_eq!(dynamic.try_into_fixed::<3>(), Ok(view));
        assert_eq!(
            dynamic.try_into_fixed::<2>(),
            Err(ViewError::ExtentMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    // ===================
    // Formatting, hashing
    // ===================

    #[test]
    fn debug_as_list() {
        let view = View::from_array(&[1, 2, 3]);
        assert_eq!(alloc::format!("{view:?}"), "[1, 2, 3]");
    }

    // ===================
    // Variance
    // ===================

    fn shorten_elements<'a, 'b>(view: View<'a, &'static str>) -> View<'a, &'b str> {
        view
    }

    fn shorten_borrow<'a, E: Extent>(view: View<'static, u8, E>) -> View<'a, u8, E> {
        view
    }

    fn longest<'b>(words: View<'_, &'b str>, fallback: &'b str) -> &'b str {
        words
            .iter()
            .copied()
            .max_by_key(|word| word.len())
            .unwrap_or(fallback)
    }

    #[test]
    fn covariant_in_element_type() {
        let words: [&'static str; 2] = ["left", "right"];
        let view: View<'_, &'static str> = View::from(&words[..]);
        assert_eq!(shorten_elements(view), ["left", "right"]);

        let local = alloc::string::String::from("fallback");
        assert_eq!(longest(view, &local), "right");
        assert_eq!(longest(View::default(), &local), "fallback");
    }

    #[test]
    fn covariant_in_borrow() {
        static BYTES: [u8; 3] = [1, 2, 3];
        let fixed = shorten_borrow(View::from_array(&BYTES));
        assert_eq!(fixed.len(), 3);
        assert_eq!(fixed.as_ptr(), BYTES.as_ptr());
    }

    #[test]
    fn copies_share_storage() {
        let data = [5, 6];
        let a = View::from_array(&data);
        let b = a;
        assert_eq!(a.as_ptr(), b.as_ptr());
        assert_eq!(a, b);
    }
}

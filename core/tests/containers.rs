//! Views over owned containers and arena allocations.
//!
//! A view must observe the container's storage directly: writes through a
//! `ViewMut` show up in the container, and a `View` sees the container's
//! current contents.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use runview_core::{Contiguous, Fixed, View, ViewError, ViewMut};

// =============================================================================
// Vec and Box
// =============================================================================

#[test]
fn vec_round_trip_shares_storage() {
    let mut values = vec![1u32, 2, 3, 4];
    let ptr = values.as_ptr();

    let mut writable: ViewMut<'_, u32> = ViewMut::from_container(&mut values);
    assert_eq!(writable.as_ptr(), ptr);
    writable[2] = 30;

    assert_eq!(values, vec![1, 2, 30, 4]);
    let view: View<'_, u32> = View::from_container(&values);
    assert_eq!(view, [1, 2, 30, 4]);
    assert_eq!(view.as_ptr(), ptr);
}

#[test]
fn boxed_slice_into_fixed_view() {
    let boxed: Box<[u8]> = vec![9u8; 6].into_boxed_slice();

    let fixed: View<'_, u8, Fixed<6>> = View::from_container(&boxed);
    assert_eq!(fixed.len(), 6);
    assert_eq!(fixed.as_ptr(), boxed.as_ptr());

    let wrong = View::<u8, Fixed<4>>::try_from_container(&boxed);
    assert_eq!(
        wrong,
        Err(ViewError::ExtentMismatch {
            expected: 4,
            actual: 6
        })
    );
}

#[test]
#[should_panic(expected = "expected 4 elements, found 6")]
fn fixed_view_of_wrong_sized_container_panics() {
    let values = vec![0i64; 6];
    let _view: View<'_, i64, Fixed<4>> = View::from_container(&values);
}

#[test]
fn empty_vec_gives_empty_view() {
    let values: Vec<String> = Vec::new();
    let view: View<'_, String> = View::from_container(&values);
    assert!(view.is_empty());
    assert_eq!(view.iter().count(), 0);
    assert_eq!(view.as_slice(), &[] as &[String]);
}

#[test]
fn non_copy_elements() {
    let words = vec![String::from("alpha"), String::from("beta"), String::from("gamma")];
    let view: View<'_, String> = View::from(&words);
    assert_eq!(view.back(), "gamma");
    assert_eq!(view.subrange(1, 1).front(), "beta");

    let mut owned = words.clone();
    let mut writable: ViewMut<'_, String> = ViewMut::from(&mut owned);
    writable.front_mut().push_str("-1");
    assert_eq!(owned[0], "alpha-1");
}

// =============================================================================
// Arena-backed storage
// =============================================================================

#[test]
fn bump_slice_view() {
    let bump = Bump::new();
    let slice: &mut [u16] = bump.alloc_slice_copy(&[5, 6, 7, 8, 9]);

    let mut writable: ViewMut<'_, u16> = ViewMut::from(&mut *slice);
    writable.reborrow().last(2).fill(0);
    let tail: View<'_, u16, Fixed<3>> = writable.into_view().first_fixed::<3>();
    assert_eq!(tail, [5, 6, 7]);

    assert_eq!(slice, &[5, 6, 7, 0, 0]);
}

#[test]
fn views_over_separate_bump_slices() {
    let bump = Bump::new();
    let left: &[i32] = bump.alloc_slice_fill_iter(0..4);
    let right: &[i32] = bump.alloc_slice_fill_iter(10..14);

    let views: [View<'_, i32>; 2] = [View::from(left), View::from(right)];
    let sums: Vec<i32> = views.iter().map(|view| view.iter().sum()).collect();
    assert_eq!(sums, vec![6, 46]);
}

// =============================================================================
// User-defined containers
// =============================================================================

/// Fixed-capacity buffer that only exposes its filled prefix.
struct Prefix {
    storage: [u8; 8],
    filled: usize,
}

unsafe impl Contiguous for Prefix {
    type Item = u8;

    fn as_ptr(&self) -> *const u8 {
        self.storage.as_ptr()
    }

    fn len(&self) -> usize {
        self.filled
    }
}

#[test]
fn custom_container_exposes_its_own_len() {
    let buffer = Prefix {
        storage: [1, 2, 3, 4, 0, 0, 0, 0],
        filled: 4,
    };
    let view: View<'_, u8> = View::from_container(&buffer);
    assert_eq!(view, [1, 2, 3, 4]);

    let fixed = View::<u8, Fixed<4>>::try_from_container(&buffer);
    assert_eq!(fixed.map(|view| view.back()), Ok(&4));
}

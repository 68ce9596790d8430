//! Extent selection through `AsView`.

use pretty_assertions::assert_eq;
use runview::prelude::*;
use runview::{Extent, ViewError};

fn extent_of<E: Extent, T>(_: &View<'_, T, E>) -> usize {
    E::STATIC
}

#[test]
fn arrays_are_fixed() {
    let data = [1u8, 2, 3];
    let view = data.view();
    assert_eq!(extent_of(&view), 3);
    assert_eq!(std::mem::size_of_val(&view), std::mem::size_of::<usize>());
}

#[test]
fn slices_and_vecs_are_dynamic() {
    let data = [1u8, 2, 3];
    let from_slice = data[..].view();
    assert_eq!(extent_of(&from_slice), DYNAMIC_EXTENT);

    let owned = vec![1u8, 2, 3];
    let from_vec = owned.view();
    assert_eq!(extent_of(&from_vec), DYNAMIC_EXTENT);
    assert_eq!(from_vec, from_slice);

    let boxed: Box<[u8]> = owned.clone().into_boxed_slice();
    assert_eq!(extent_of(&boxed.view()), DYNAMIC_EXTENT);
}

#[test]
fn view_mut_writes_through() {
    let mut grid = [[0u8; 3]; 2];
    grid.view_mut().back_mut()[1] = 7;
    for row in grid.iter_mut() {
        row.view_mut().first_fixed::<1>().fill(1);
    }
    assert_eq!(grid, [[1, 0, 0], [1, 7, 0]]);
}

#[test]
fn generic_over_extent() {
    fn checksum<E: Extent>(view: View<'_, u8, E>) -> u32 {
        view.iter().map(|&byte| u32::from(byte)).sum()
    }

    let array = [1u8, 2, 3, 4];
    let vec = vec![5u8, 6];
    assert_eq!(checksum(array.view()), 10);
    assert_eq!(checksum(vec.view()), 11);
    assert_eq!(checksum(array.view().last_fixed::<2>()), 7);
}

#[test]
fn narrowing_reports_mismatch() {
    let owned = vec![0u16; 5];
    let narrowed: Result<View<'_, u16, Fixed<2>>, ViewError> = owned.view().try_into();
    assert_eq!(
        narrowed,
        Err(ViewError::ExtentMismatch {
            expected: 2,
            actual: 5
        })
    );
    assert_eq!(
        narrowed.unwrap_err().to_string(),
        "extent mismatch: expected 2 elements, found 5"
    );
}

#[test]
fn arena_backed_view() {
    let bump = bumpalo::Bump::new();
    let scratch: &mut [u32] = bump.alloc_slice_fill_copy(8, 0);
    {
        let mut view = scratch.view_mut();
        for (i, slot) in view.iter_mut().enumerate() {
            *slot = i as u32 * 10;
        }
    }
    assert_eq!(scratch.view().subrange(2, 3), [20, 30, 40]);
}

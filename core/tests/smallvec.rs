//! Views over `SmallVec`, inline and spilled.

use pretty_assertions::assert_eq;
use runview_core::{Contiguous, Fixed, View, ViewMut};
use smallvec::{SmallVec, smallvec};

#[test]
fn inline_and_spilled() {
    let mut inline: SmallVec<[u32; 4]> = smallvec![1, 2, 3];
    assert!(!inline.spilled());
    {
        let mut view: ViewMut<'_, u32> = ViewMut::from_container(&mut inline);
        view[1] = 20;
    }
    assert_eq!(inline.as_slice(), &[1, 20, 3]);

    inline.extend([4, 5, 6]);
    assert!(inline.spilled());
    let view: View<'_, u32, Fixed<6>> = View::from_container(&inline);
    assert_eq!(view, [1, 20, 3, 4, 5, 6]);
    assert_eq!(view.as_ptr(), inline.as_ptr());
}

#[test]
fn contiguous_reports_inline_storage() {
    let small: SmallVec<[u8; 8]> = smallvec![7, 8];
    assert_eq!(Contiguous::len(&small), 2);
    assert_eq!(Contiguous::as_ptr(&small), small.as_ptr());
    assert!(!Contiguous::is_empty(&small));
}

#[test]
fn empty_smallvec_gives_empty_view() {
    let empty: SmallVec<[i64; 2]> = SmallVec::new();
    let view: View<'_, i64> = View::from_container(&empty);
    assert!(view.is_empty());
    assert!(View::<i64, Fixed<1>>::try_from_container(&empty).is_err());
}

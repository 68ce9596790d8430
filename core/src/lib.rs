//! Non-owning views of contiguous memory with compile-time or runtime extents.
//!
//! A [`View`] is a pointer plus a length, like `&[T]`, except that the length
//! can live in the type. `View<T, Fixed<4>>` is a single pointer whose length
//! is `4` everywhere the compiler can see it; `View<T, Dynamic>` (the default)
//! carries the length at runtime. Both share one interface, so code that
//! takes a view works with either.
//!
//! ```text
//! View<T, Fixed<N>>:  [ptr]          len = N (in the type)
//! View<T, Dynamic>:   [ptr | len]    len read at runtime
//! ```
//!
//! [`ViewMut`] is the writable counterpart, with `&mut [T]` rules: not
//! `Copy`, converts into a `View`, never the other way.
//!
//! # Example
//!
//! ```
//! use runview_core::{Dynamic, Fixed, View, ViewMut};
//!
//! let mut samples = [10, 20, 30, 40, 50];
//!
//! let view = View::from_array(&samples);
//! let head: View<'_, i32, Fixed<2>> = view.first_fixed::<2>();
//! let tail: View<'_, i32, Dynamic> = view.last(2);
//! assert_eq!(head, [10, 20]);
//! assert_eq!(tail, [40, 50]);
//!
//! let mut writable = ViewMut::from_array(&mut samples);
//! writable.reborrow().subrange(1, 3).fill(0);
//! assert_eq!(samples, [10, 0, 0, 0, 50]);
//! ```
//!
//! # Contracts
//!
//! Violations of a view's preconditions are programming errors:
//!
//! - when the offending values are constants and the extent is fixed, the
//!   build fails (`first_fixed::<4>()` on a `Fixed<3>` view, `front()` on
//!   `Fixed<0>`);
//! - otherwise the safe methods panic, in every build profile;
//! - the `try_*` methods report a [`ViewError`] instead;
//! - the `unsafe` `*_unchecked` methods skip the check outside debug builds.
//!
//! # Features
//!
//! - `alloc` (default): [`Contiguous`] for `Vec<T>` and `Box<[T]>`.
//! - `smallvec`: [`Contiguous`] for `smallvec::SmallVec`.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod contiguous;
mod convert;
mod error;
mod extent;
mod raw;
mod view;
mod view_mut;

pub use contiguous::{Contiguous, ContiguousMut, IsView};
pub use error::ViewError;
pub use extent::{DYNAMIC_EXTENT, Dynamic, Extent, Fixed};
pub use view::View;
pub use view_mut::ViewMut;

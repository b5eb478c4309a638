// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Range Access
//!
//! Resolves how to traverse a range at build time. For every access point
//! (`begin`, `end`, `size`, `empty`, `data`, and the derived `cbegin`,
//! `cend`, `rbegin`, `rend`, `crbegin`, `crend`), exactly one implementation
//! is chosen per range type, by fixed precedence:
//!
//! 1. a member the type provides itself (`members::Members` and friends),
//! 2. an accessor attached from the outside (`members::Hooks`),
//! 3. the built-in fallback for arrays and slices.
//!
//! A range with no viable alternative does not build; there is no runtime
//! fallback.
//!
//! ## Entry Points
//!
//! - Concrete values: the `begin!`, `end!`, `size!`, `empty!`, `data!`,
//!   `cbegin!`, `cend!`, `rbegin!`, `rend!`, `crbegin!`, and `crend!` macros
//!   exported at the crate root.
//! - Generic code: the `Range` trait, together with the `begin` and `end`
//!   functions of this module. `range_access!` implements `Range` by routing
//!   through the macros, so generic and concrete call sites agree.
//! - `Bounds<C, S>`: an explicit cursor/end-marker pair that is a `Range`
//!   and an `IntoIterator`.
//!
//! ## Usage
//!
//! ```rust
//! use ranger_core::access::{self, Bounds};
//! use ranger_core::cursor::iota::Iota;
//! use ranger_core::cursor::InputCursor;
//!
//! let v = vec![3, 1, 2];
//! assert_eq!(*access::begin(&&v).read(), 3);
//! assert_eq!(ranger_core::size!(&v), 3);
//!
//! let digits = Bounds::new(Iota::new(0u8), Iota::new(10u8));
//! assert_eq!(ranger_core::size!(digits), 10);
//! assert_eq!(digits.into_iter().sum::<u8>(), 45);
//! ```

mod macros;
pub mod members;
mod probe;

#[doc(hidden)]
pub use probe::{expect_sentinel, strategy, Probe};

use crate::cursor::iter::CursorIter;
use crate::cursor::slice::SliceCursor;
use crate::cursor::{Cursor, InputCursor, Sentinel};

/// A range whose access has been resolved.
///
/// Implemented on borrowed ranges (`&'a [T; N]`, `&'a [T]`, `&'a Vec<T>`)
/// through `range_access!`, and on `Bounds`. Algorithms take a `Range` by
/// value and derive their cursor/end-marker pair from it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a range",
    label = "no member, hook, or built-in `begin`/`end` is registered for `{Self}`",
    note = "implement `Members` or `Hooks` for the borrowed type and register it with `range_access!`"
)]
pub trait Range {
    /// The cursor at the first element.
    type Cursor: Cursor;
    /// The end-marker terminating the traversal.
    type End: Sentinel<Self::Cursor>;

    /// Returns a cursor at the first element.
    fn begin(&self) -> Self::Cursor;

    /// Returns the end-marker.
    fn end(&self) -> Self::End;
}

/// Returns the resolved cursor at the first element of `range`.
#[inline(always)]
pub fn begin<R>(range: &R) -> R::Cursor
where
    R: Range,
{
    Range::begin(range)
}

/// Returns the resolved end-marker of `range`.
#[inline(always)]
pub fn end<R>(range: &R) -> R::End
where
    R: Range,
{
    Range::end(range)
}

/// Converts a borrowed range to its read-only view.
pub trait AsConst {
    /// The read-only view.
    type Const;

    /// Returns the read-only view of `self`.
    fn as_const(self) -> Self::Const;
}

impl<'a, X> AsConst for &'a X
where
    X: ?Sized,
{
    type Const = &'a X;

    #[inline(always)]
    fn as_const(self) -> &'a X {
        self
    }
}

impl<'a, X> AsConst for &'a mut X
where
    X: ?Sized,
{
    type Const = &'a X;

    #[inline(always)]
    fn as_const(self) -> &'a X {
        self
    }
}

/// Returns the read-only view of `range`.
#[inline(always)]
pub fn as_const<R>(range: R) -> R::Const
where
    R: AsConst,
{
    range.as_const()
}

/// An explicit `[begin, end)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds<C, S> {
    begin: C,
    end: S,
}

impl<C, S> Bounds<C, S> {
    /// Creates a range from a cursor and its end-marker.
    #[inline(always)]
    pub const fn new(begin: C, end: S) -> Self {
        Self { begin, end }
    }

    /// Splits the range into its cursor and end-marker.
    #[inline(always)]
    pub fn into_parts(self) -> (C, S) {
        (self.begin, self.end)
    }
}

impl<C, S> Range for Bounds<C, S>
where
    C: Cursor + Clone,
    S: Sentinel<C> + Clone,
{
    type Cursor = C;
    type End = S;

    #[inline(always)]
    fn begin(&self) -> C {
        self.begin.clone()
    }

    #[inline(always)]
    fn end(&self) -> S {
        self.end.clone()
    }
}

impl<C, S> IntoIterator for Bounds<C, S>
where
    C: InputCursor,
    S: Sentinel<C>,
{
    type Item = C::Item;
    type IntoIter = CursorIter<C, S>;

    #[inline]
    fn into_iter(self) -> CursorIter<C, S> {
        CursorIter::new(self.begin, self.end)
    }
}

crate::range_access!(impl['a, T, const N: usize] &'a [T; N] => SliceCursor<'a, T>, SliceCursor<'a, T>);
crate::range_access!(impl['a, T] &'a [T] => SliceCursor<'a, T>, SliceCursor<'a, T>);
crate::range_access!(impl['a, T] &'a Vec<T> => SliceCursor<'a, T>, SliceCursor<'a, T>);

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

//! # Filter-Copy
//!
//! `replace_copy_if` copies a range into a destination, substituting a fixed
//! replacement for every element whose (projected) value satisfies a
//! predicate. Source and destination advance in lockstep, so the output has
//! exactly as many elements as the input.
//!
//! ## Highlights
//!
//! - Single pass, O(n) time, O(1) auxiliary space.
//! - The predicate sees `proj(element)`; the element itself (not its
//!   projection) is what gets copied.
//! - The replacement is written by reference, so destinations that clone
//!   (`BackInserter`, `SliceCursorMut`) never need ownership of it.
//!
//! ## Usage
//!
//! ```rust
//! use ranger_algo::algorithm::replace_copy_if::replace_copy_if;
//! use ranger_core::cursor::output::back_inserter;
//!
//! let src = [1, -2, 3, -4];
//! let mut dst: Vec<i32> = Vec::new();
//! replace_copy_if(&src, back_inserter(&mut dst), |x: &i32| *x < 0, &0);
//! assert_eq!(dst, vec![1, 0, 3, 0]);
//! ```

use crate::algorithm::copy::emit;
use ranger_core::access::Range;
use ranger_core::cursor::{Cursor, InputCursor, Sentinel, Writable};
use ranger_core::functional::{Identity, Predicate, Projection};
use ranger_core::result::InOutResult;

/// Copies `range` into `out`, writing `value` in place of every element for
/// which `pred` holds.
///
/// Equivalent to [`replace_copy_if_by`] with the `Identity` projection.
#[inline]
pub fn replace_copy_if<R, O, P, V>(
    range: R,
    out: O,
    pred: P,
    value: &V,
) -> InOutResult<R::Cursor, O>
where
    R: Range,
    R::Cursor: InputCursor,
    P: Predicate<<R::Cursor as InputCursor>::Item>,
    O: Cursor + Writable<<R::Cursor as InputCursor>::Item> + for<'v> Writable<&'v V>,
{
    replace_copy_if_by(range, out, pred, value, Identity)
}

/// Copies `range` into `out`, writing `value` in place of every element `e`
/// for which `pred(proj(e))` holds.
///
/// The destination must have room for every element of `range`. Returns the
/// end position of the input and one past the last position written.
///
/// # Examples
///
/// ```rust
/// use ranger_algo::algorithm::replace_copy_if::replace_copy_if_by;
/// use ranger_core::cursor::slice::SliceCursorMut;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Reading {
///     sensor: u8,
///     value: f64,
/// }
///
/// let src = vec![
///     Reading { sensor: 1, value: 0.5 },
///     Reading { sensor: 2, value: -1.0 },
/// ];
/// let invalid = Reading { sensor: 0, value: 0.0 };
/// let mut dst = vec![invalid.clone(); 2];
///
/// let r = replace_copy_if_by(
///     &src,
///     SliceCursorMut::new(&mut dst),
///     |v: f64| v < 0.0,
///     &invalid,
///     |r: &Reading| r.value,
/// );
/// assert_eq!(r.output.position(), 2);
/// assert_eq!(dst[0], src[0]);
/// assert_eq!(dst[1], invalid);
/// ```
#[inline]
pub fn replace_copy_if_by<R, O, P, V, J>(
    range: R,
    mut out: O,
    mut pred: P,
    value: &V,
    proj: J,
) -> InOutResult<R::Cursor, O>
where
    R: Range,
    R::Cursor: InputCursor,
    J: Projection<<R::Cursor as InputCursor>::Item>,
    P: Predicate<J::Output>,
    O: Cursor + Writable<<R::Cursor as InputCursor>::Item> + for<'v> Writable<&'v V>,
{
    let mut first = range.begin();
    let last = range.end();

    while !last.is_end(&first) {
        if pred.test(proj.project(first.read())) {
            emit(&mut out, value);
        } else {
            emit(&mut out, first.read());
        }
        first.advance();
    }

    InOutResult::new(first, out)
}

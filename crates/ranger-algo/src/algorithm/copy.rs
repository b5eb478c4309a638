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

//! Element-wise copy from a range into a destination cursor.

use ranger_core::access::Range;
use ranger_core::cursor::{Cursor, InputCursor, Sentinel, Writable};
use ranger_core::result::InOutResult;

/// Writes `value` at `out` and advances it.
#[inline(always)]
pub(crate) fn emit<O, T>(out: &mut O, value: T)
where
    O: Cursor + Writable<T>,
{
    out.write(value);
    out.advance();
}

/// Copies `[first, last)` into `out`, returning both final positions.
#[inline]
pub(crate) fn copy_until<C, S, O>(mut first: C, last: &S, mut out: O) -> (C, O)
where
    C: InputCursor,
    S: Sentinel<C>,
    O: Cursor + Writable<C::Item>,
{
    while !last.is_end(&first) {
        emit(&mut out, first.read());
        first.advance();
    }
    (first, out)
}

/// Copies every element of `range` into `out`, in order.
///
/// The destination must have room for every element of `range`.
///
/// # Examples
///
/// ```rust
/// use ranger_algo::algorithm::copy::copy;
/// use ranger_core::cursor::output::back_inserter;
///
/// let src = [1, 2, 3];
/// let mut dst: Vec<i32> = Vec::new();
/// let r = copy(&src, back_inserter(&mut dst));
/// assert_eq!(r.input.position(), 3);
/// assert_eq!(dst, vec![1, 2, 3]);
/// ```
#[inline]
pub fn copy<R, O>(range: R, out: O) -> InOutResult<R::Cursor, O>
where
    R: Range,
    R::Cursor: InputCursor,
    O: Cursor + Writable<<R::Cursor as InputCursor>::Item>,
{
    let last = range.end();
    let (input, output) = copy_until(range.begin(), &last, out);
    InOutResult::new(input, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranger_core::access::Bounds;
    use ranger_core::cursor::iota::Iota;
    use ranger_core::cursor::output::back_inserter;
    use ranger_core::cursor::slice::SliceCursorMut;

    #[test]
    fn test_copy_into_slice_destination() {
        let src = vec![4, 5, 6];
        let mut dst = [0; 4];

        let r = copy(&src, SliceCursorMut::new(&mut dst));

        assert_eq!(r.input.position(), 3);
        assert_eq!(r.output.position(), 3);
        assert_eq!(dst, [4, 5, 6, 0]);
    }

    #[test]
    fn test_copy_empty_range_writes_nothing() {
        let src: [u8; 0] = [];
        let mut dst: Vec<u8> = Vec::new();

        let r = copy(&src, back_inserter(&mut dst));

        assert_eq!(r.input.position(), 0);
        assert!(r.output.is_empty());
    }

    #[test]
    fn test_copy_from_counting_bounds() {
        let mut dst: Vec<u32> = Vec::new();
        let r = copy(Bounds::new(Iota::new(5u32), Iota::new(9u32)), back_inserter(&mut dst));

        assert_eq!(r.input.value(), 9);
        assert_eq!(dst, vec![5, 6, 7, 8]);
    }
}

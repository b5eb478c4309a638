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

//! # Reverse Cursor
//!
//! `Reverse<C>` walks a bidirectional cursor backwards. It stores the base
//! position one past the element it designates, so the reverse of a bounded
//! `[begin, end)` pair is simply `[Reverse(end), Reverse(begin))` and no
//! "before the first element" position is ever formed.
//!
//! ```rust
//! use ranger_core::cursor::reverse::Reverse;
//! use ranger_core::cursor::slice::SliceCursor;
//! use ranger_core::cursor::{Cursor, InputCursor};
//!
//! let data = [1, 2, 3];
//! let mut r = Reverse::new(SliceCursor::at_end(&data));
//! assert_eq!(*r.read(), 3);
//! r.advance();
//! assert_eq!(*r.read(), 2);
//! ```

use crate::cursor::{BidirectionalCursor, Cursor, InputCursor, SizedSentinel};

/// A cursor adaptor that traverses its base cursor in the opposite direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reverse<C> {
    base: C,
}

impl<C> Reverse<C> {
    /// Wraps `base`; the new cursor designates the element just before it.
    #[inline(always)]
    pub const fn new(base: C) -> Self {
        Self { base }
    }

    /// Returns the underlying forward cursor.
    #[inline(always)]
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Unwraps the underlying forward cursor.
    #[inline(always)]
    pub fn into_base(self) -> C {
        self.base
    }
}

/// Creates a `Reverse` cursor from a bidirectional `base`.
#[inline(always)]
pub fn make_reverse<C>(base: C) -> Reverse<C>
where
    C: BidirectionalCursor,
{
    Reverse::new(base)
}

impl<C> Cursor for Reverse<C>
where
    C: BidirectionalCursor,
{
    #[inline(always)]
    fn advance(&mut self) {
        self.base.retreat();
    }
}

impl<C> BidirectionalCursor for Reverse<C>
where
    C: BidirectionalCursor,
{
    #[inline(always)]
    fn retreat(&mut self) {
        self.base.advance();
    }
}

impl<C> InputCursor for Reverse<C>
where
    C: BidirectionalCursor + InputCursor + Clone,
{
    type Item = C::Item;

    #[inline(always)]
    fn read(&self) -> C::Item {
        let mut prev = self.base.clone();
        prev.retreat();
        prev.read()
    }
}

impl<C> SizedSentinel<Reverse<C>> for Reverse<C>
where
    C: BidirectionalCursor + PartialEq + SizedSentinel<C>,
{
    #[inline(always)]
    fn distance_from(&self, cursor: &Reverse<C>) -> usize {
        cursor.base.distance_from(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::slice::SliceCursor;
    use crate::cursor::Sentinel;

    #[test]
    fn test_reverse_walks_backwards_to_begin() {
        let data = [1, 2, 3, 4];
        let mut c = make_reverse(SliceCursor::at_end(&data));
        let end = make_reverse(SliceCursor::new(&data));

        let mut seen = Vec::new();
        while !end.is_end(&c) {
            seen.push(*c.read());
            c.advance();
        }
        assert_eq!(seen, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_distance_matches_forward_distance() {
        let data = [1, 2, 3, 4, 5];
        let rbegin = Reverse::new(SliceCursor::at_end(&data));
        let rend = Reverse::new(SliceCursor::new(&data));
        assert_eq!(rend.distance_from(&rbegin), 5);
    }

    #[test]
    fn test_reverse_retreat_moves_base_forward() {
        let data = [7, 8, 9];
        let mut c = Reverse::new(SliceCursor::at(&data, 1));
        assert_eq!(*c.read(), 7);
        c.retreat();
        assert_eq!(*c.read(), 8);
        assert_eq!(c.base().position(), 2);
        assert_eq!(c.into_base().position(), 2);
    }
}

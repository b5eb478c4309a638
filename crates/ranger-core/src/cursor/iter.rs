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

//! # Cursor Iterator Bridge
//!
//! `CursorIter<C, S>` adapts a cursor and its end-marker to the standard
//! `Iterator` interface, so anything expressed as a range can be fed into
//! iterator pipelines (`collect`, `zip`, `sum`, ...) without copying.
//!
//! ## Highlights
//!
//! - Implements `Iterator` and `FusedIterator`: once the sentinel recognizes
//!   the cursor, every further call returns `None`.
//! - `into_cursor` hands back the position reached, mirroring the way the
//!   algorithms return their final cursors.
//!
//! ## Usage
//!
//! ```rust
//! use ranger_core::cursor::iter::CursorIter;
//! use ranger_core::cursor::slice::SliceCursor;
//!
//! let data = [1, 2, 3];
//! let iter = CursorIter::new(SliceCursor::new(&data), SliceCursor::at_end(&data));
//! assert_eq!(iter.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use crate::cursor::{InputCursor, Sentinel, SizedSentinel};
use std::iter::FusedIterator;

/// An iterator that reads a cursor until its end-marker is reached.
#[derive(Debug, Clone)]
pub struct CursorIter<C, S> {
    cursor: C,
    end: S,
}

impl<C, S> CursorIter<C, S> {
    /// Creates an iterator over `[cursor, end)`.
    #[inline]
    pub fn new(cursor: C, end: S) -> Self {
        Self { cursor, end }
    }

    /// Returns the position the iterator will read next.
    #[inline]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Consumes the iterator and returns the position it reached.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C, S> CursorIter<C, S>
where
    S: SizedSentinel<C>,
{
    /// Returns the exact number of elements left, in constant time.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end.distance_from(&self.cursor)
    }
}

impl<C, S> Iterator for CursorIter<C, S>
where
    C: InputCursor,
    S: Sentinel<C>,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.end.is_end(&self.cursor) {
            return None;
        }
        let item = self.cursor.read();
        self.cursor.advance();
        Some(item)
    }
}

impl<C, S> FusedIterator for CursorIter<C, S>
where
    C: InputCursor,
    S: Sentinel<C>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::iota::Iota;
    use crate::cursor::slice::SliceCursor;

    #[test]
    fn test_cursor_iter_yields_all_then_none() {
        let data = [10, 20];
        let mut iter = CursorIter::new(SliceCursor::new(&data), SliceCursor::at_end(&data));

        assert_eq!(iter.next(), Some(&10));
        assert_eq!(iter.next(), Some(&20));
        assert_eq!(iter.next(), None);
        // Fused
        assert_eq!(iter.next(), None);
        assert_eq!(iter.into_cursor().position(), 2);
    }

    #[test]
    fn test_cursor_iter_over_empty_range() {
        let data: [u8; 0] = [];
        let mut iter = CursorIter::new(SliceCursor::new(&data), SliceCursor::at_end(&data));
        assert_eq!(iter.remaining(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_cursor_iter_remaining_counts_down() {
        let mut iter = CursorIter::new(Iota::new(0u32), Iota::new(4u32));
        assert_eq!(iter.remaining(), 4);
        iter.next();
        assert_eq!(iter.remaining(), 3);
        assert_eq!(iter.cursor().value(), 1);
        assert_eq!(iter.sum::<u32>(), 1 + 2 + 3);
    }
}

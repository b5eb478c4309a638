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

//! # Slice Cursors
//!
//! Positions into borrowed slices. `SliceCursor<'a, T>` is the cursor the
//! built-in range access hands out for arrays, slices, and vectors: reading
//! yields `&'a T`, so the element outlives the cursor, and two cursors are
//! equal exactly when they address the same slot of the same slice.
//! `SliceCursorMut<'a, T>` is the matching destination cursor.
//!
//! ## Usage
//!
//! ```rust
//! use ranger_core::cursor::slice::SliceCursor;
//! use ranger_core::cursor::{Cursor, InputCursor, Sentinel};
//!
//! let data = [1, 2, 3];
//! let mut cursor = SliceCursor::new(&data);
//! let end = SliceCursor::at_end(&data);
//!
//! let mut seen = Vec::new();
//! while !end.is_end(&cursor) {
//!     seen.push(*cursor.read());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

use crate::cursor::{
    BidirectionalCursor, ContiguousCursor, Cursor, InputCursor, SizedSentinel, Writable,
};

/// A read-only cursor into a slice.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at the first element of `slice`.
    #[inline(always)]
    pub const fn new(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Creates a cursor one past the last element of `slice`.
    #[inline(always)]
    pub const fn at_end(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// Creates a cursor at position `pos` of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > slice.len()`.
    #[inline]
    pub fn at(slice: &'a [T], pos: usize) -> Self {
        assert!(
            pos <= slice.len(),
            "called `SliceCursor::at` with position out of bounds: the len is {} but the position is {}",
            slice.len(),
            pos
        );
        Self { slice, pos }
    }

    /// Returns the offset of this cursor from the start of its slice.
    #[inline(always)]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the elements from the current position to the end.
    #[inline(always)]
    pub fn remaining(&self) -> &'a [T] {
        &self.slice[self.pos..]
    }

    /// Advances the cursor by `n` positions.
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        debug_assert!(
            n <= self.slice.len() - self.pos,
            "called `SliceCursor::advance_by` past the end: {} remaining but advancing by {}",
            self.slice.len() - self.pos,
            n
        );
        self.pos += n;
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> std::fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceCursor")
            .field("position", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    #[inline(always)]
    fn advance(&mut self) {
        debug_assert!(
            self.pos < self.slice.len(),
            "called `SliceCursor::advance` at the end of a slice of len {}",
            self.slice.len()
        );
        self.pos += 1;
    }
}

impl<'a, T> InputCursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn read(&self) -> &'a T {
        debug_assert!(
            self.pos < self.slice.len(),
            "called `SliceCursor::read` at the end of a slice of len {}",
            self.slice.len()
        );
        &self.slice[self.pos]
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline(always)]
    fn retreat(&mut self) {
        debug_assert!(
            self.pos > 0,
            "called `SliceCursor::retreat` at the start of a slice"
        );
        self.pos -= 1;
    }
}

impl<'a, T> ContiguousCursor for SliceCursor<'a, T> {
    type Elem = T;

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.pos)
    }
}

impl<'a, T> SizedSentinel<SliceCursor<'a, T>> for SliceCursor<'a, T> {
    #[inline(always)]
    fn distance_from(&self, cursor: &SliceCursor<'a, T>) -> usize {
        debug_assert!(
            std::ptr::eq(self.slice.as_ptr(), cursor.slice.as_ptr()),
            "called `SliceCursor::distance_from` with cursors into different slices"
        );
        self.pos.saturating_sub(cursor.pos)
    }
}

/// A destination cursor that overwrites the elements of a mutable slice.
///
/// The caller guarantees that the slice has room for every write; writing
/// past the end panics instead of corrupting memory.
pub struct SliceCursorMut<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// Creates a destination cursor at the first slot of `slice`.
    #[inline(always)]
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Returns the number of slots written (advanced over) so far.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of slots still available.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.slice.len() - self.pos
    }

    /// Consumes the cursor and returns the underlying slice.
    #[inline(always)]
    pub fn into_slice(self) -> &'a mut [T] {
        self.slice
    }
}

impl<T> std::fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceCursorMut")
            .field("position", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Cursor for SliceCursorMut<'_, T> {
    #[inline(always)]
    fn advance(&mut self) {
        debug_assert!(
            self.pos < self.slice.len(),
            "called `SliceCursorMut::advance` at the end of a slice of len {}",
            self.slice.len()
        );
        self.pos += 1;
    }
}

impl<T> Writable<T> for SliceCursorMut<'_, T> {
    #[inline(always)]
    fn write(&mut self, value: T) {
        debug_assert!(
            self.pos < self.slice.len(),
            "called `SliceCursorMut::write` with insufficient capacity: the len is {} but the position is {}",
            self.slice.len(),
            self.pos
        );
        self.slice[self.pos] = value;
    }
}

impl<'v, T> Writable<&'v T> for SliceCursorMut<'_, T>
where
    T: Clone,
{
    #[inline(always)]
    fn write(&mut self, value: &'v T) {
        debug_assert!(
            self.pos < self.slice.len(),
            "called `SliceCursorMut::write` with insufficient capacity: the len is {} but the position is {}",
            self.slice.len(),
            self.pos
        );
        self.slice[self.pos].clone_from(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Sentinel;

    #[test]
    fn test_slice_cursor_reads_in_order_and_stops_at_end() {
        let data = [10, 20, 30];
        let mut c = SliceCursor::new(&data);
        let end = SliceCursor::at_end(&data);

        assert_eq!(*c.read(), 10);
        c.advance();
        assert_eq!(*c.read(), 20);
        c.advance();
        c.advance();
        assert!(end.is_end(&c));
        assert_eq!(c.position(), 3);
    }

    #[test]
    fn test_slice_cursor_equality_is_positional_not_by_value() {
        let a = [1, 1, 1];
        let b = [1, 1, 1];
        assert_eq!(SliceCursor::at(&a, 1), SliceCursor::at(&a, 1));
        assert_ne!(SliceCursor::at(&a, 1), SliceCursor::at(&a, 2));
        // Same contents but different storage.
        assert_ne!(SliceCursor::at(&a, 1), SliceCursor::at(&b, 1));
    }

    #[test]
    fn test_slice_cursor_as_ptr_tracks_address() {
        let data = [1u64, 2, 3, 4];
        let mut c = SliceCursor::new(&data);
        assert_eq!(c.as_ptr(), data.as_ptr());
        c.advance_by(4);
        assert_eq!(c.as_ptr(), data.as_ptr().wrapping_add(4));
    }

    #[test]
    fn test_slice_cursor_retreat_and_distance() {
        let data = ['a', 'b', 'c'];
        let begin = SliceCursor::new(&data);
        let mut c = SliceCursor::at_end(&data);
        assert_eq!(c.distance_from(&begin), 3);
        c.retreat();
        assert_eq!(*c.read(), 'c');
        assert_eq!(SliceCursor::at_end(&data).distance_from(&c), 1);
    }

    #[test]
    fn test_slice_cursor_remaining() {
        let data = [5, 6, 7];
        let c = SliceCursor::at(&data, 1);
        assert_eq!(c.remaining(), &[6, 7]);
    }

    #[test]
    #[should_panic(expected = "position out of bounds")]
    fn test_slice_cursor_at_rejects_out_of_bounds() {
        let data = [1, 2];
        let _ = SliceCursor::at(&data, 3);
    }

    #[test]
    fn test_slice_cursor_mut_writes_by_value_and_by_reference() {
        let mut out = vec![String::new(); 2];
        let mut c = SliceCursorMut::new(&mut out);
        c.write(String::from("owned"));
        c.advance();
        let borrowed = String::from("cloned");
        c.write(&borrowed);
        c.advance();
        assert_eq!(c.position(), 2);
        assert_eq!(c.remaining(), 0);
        assert_eq!(out, vec!["owned".to_string(), "cloned".to_string()]);
    }

    #[test]
    fn test_debug_output() {
        let data = [1, 2, 3];
        let c = SliceCursor::at(&data, 2);
        assert_eq!(format!("{:?}", c), "SliceCursor { position: 2, len: 3 }");
    }
}

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

//! Provider protocols a range type can expose.
//!
//! A range type opts into access by implementing one or more of these traits,
//! usually on its shared borrow (`&'a MyContainer`) so the cursors it hands out
//! can borrow for `'a`. Which of them is actually used for a given access point
//! is decided by the probes in `access::probe`, never by the caller.
//!
//! - `Members`: the type's own `begin`/`end` accessors. Highest precedence.
//! - `Hooks`: free accessors attached to the type from the outside
//!   (`Hooks::begin_of(&r)`), consulted only when no member applies.
//! - `SizeMember`, `EmptyMember`, `DataMember`: optional member queries.
//! - `ReverseMembers`: member reverse accessors, consulted when a reverse
//!   cursor cannot be synthesized from a bounded range.

use crate::cursor::slice::SliceCursor;

/// Member `begin`/`end` accessors.
pub trait Members {
    /// The cursor returned by `begin`.
    type Cursor;
    /// The end-marker returned by `end`.
    type End;

    /// Returns a cursor at the first element.
    fn begin(&self) -> Self::Cursor;

    /// Returns the end-marker.
    fn end(&self) -> Self::End;
}

/// Free-standing `begin`/`end` accessors found through the range's type.
pub trait Hooks {
    /// The cursor returned by `begin_of`.
    type Cursor;
    /// The end-marker returned by `end_of`.
    type End;

    /// Returns a cursor at the first element of `range`.
    fn begin_of(range: &Self) -> Self::Cursor;

    /// Returns the end-marker of `range`.
    fn end_of(range: &Self) -> Self::End;
}

/// A member element count.
pub trait SizeMember {
    /// Returns the number of elements.
    fn size(&self) -> usize;
}

/// A member emptiness query whose result converts to `bool`.
pub trait EmptyMember {
    /// The raw result of the query.
    type Output: Into<bool>;

    /// Returns whether the range has no elements.
    fn empty(&self) -> Self::Output;
}

/// A member pointer to contiguous backing storage.
pub trait DataMember {
    /// The element type of the storage.
    type Elem;

    /// Returns a pointer to the first element of the storage.
    fn data(&self) -> *const Self::Elem;
}

/// Member reverse accessors.
pub trait ReverseMembers {
    /// The cursor returned by `rbegin`.
    type RevCursor;
    /// The end-marker returned by `rend`.
    type RevEnd;

    /// Returns a cursor at the last element, walking backwards.
    fn rbegin(&self) -> Self::RevCursor;

    /// Returns the end-marker of the reversed traversal.
    fn rend(&self) -> Self::RevEnd;
}

impl<'a, T> Members for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    #[inline(always)]
    fn begin(&self) -> SliceCursor<'a, T> {
        let this: &'a Vec<T> = *self;
        SliceCursor::new(this.as_slice())
    }

    #[inline(always)]
    fn end(&self) -> SliceCursor<'a, T> {
        let this: &'a Vec<T> = *self;
        SliceCursor::at_end(this.as_slice())
    }
}

impl<T> SizeMember for &Vec<T> {
    #[inline(always)]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> EmptyMember for &Vec<T> {
    type Output = bool;

    #[inline(always)]
    fn empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> DataMember for &Vec<T> {
    type Elem = T;

    #[inline(always)]
    fn data(&self) -> *const T {
        self.as_ptr()
    }
}

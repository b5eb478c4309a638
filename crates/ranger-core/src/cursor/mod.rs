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

//! # Cursor Capabilities
//!
//! The capability oracle consumed by range access and the algorithms. Every
//! capability is a trait; a type "supports" a behavior exactly when it
//! implements the trait, so asking the oracle is writing a bound, and a
//! failed query is a build error rather than a runtime branch.
//!
//! ## Capabilities
//!
//! - `Cursor`: a position that can advance.
//! - `InputCursor`: a cursor that can be read without being consumed.
//! - `BidirectionalCursor`: a cursor that can step backwards.
//! - `ContiguousCursor`: an input cursor over contiguous storage, exposing the
//!   address of the element it points at.
//! - `Writable<T>`: a destination that accepts a `T` at its current position.
//! - `Sentinel<C>`: an end-marker that recognizes when a `C` is exhausted.
//! - `SizedSentinel<C>`: an end-marker that can also report the remaining
//!   distance in constant time.
//!
//! Every `Cursor + PartialEq` is its own sentinel, which covers the common
//! "bounded" case where `begin` and `end` share a type.
//!
//! ## Submodules
//!
//! - `slice`: read and write cursors over slices.
//! - `output`: the appending `BackInserter`.
//! - `reverse`: `Reverse<C>`, walking a bidirectional cursor backwards.
//! - `iota`: `Iota<T>`, a counting cursor over integers.
//! - `iter`: `CursorIter<C, S>`, bridging a cursor/sentinel pair into `Iterator`.

pub mod iota;
pub mod iter;
pub mod output;
pub mod reverse;
pub mod slice;

/// A sequence position that can advance.
///
/// This is the weakest capability: output destinations such as
/// `BackInserter` only need to be advanced and written to, never read.
pub trait Cursor {
    /// Moves the cursor to the next position.
    fn advance(&mut self);
}

/// A cursor whose current element can be read.
///
/// Reading does not move the cursor and can be repeated; algorithms rely on
/// this to project the same element more than once.
pub trait InputCursor: Cursor {
    /// The value produced by reading, typically a shared reference.
    type Item;

    /// Reads the element at the current position.
    ///
    /// Reading at a position recognized by the range's sentinel is a
    /// precondition violation.
    fn read(&self) -> Self::Item;
}

/// A cursor that can also move backwards.
pub trait BidirectionalCursor: Cursor {
    /// Moves the cursor to the previous position.
    fn retreat(&mut self);
}

/// An input cursor over elements laid out contiguously in memory.
pub trait ContiguousCursor: InputCursor {
    /// The element type stored at the addressed location.
    type Elem;

    /// Returns the address of the element at the current position.
    ///
    /// At the end position this is the one-past-the-end address and must not
    /// be dereferenced.
    fn as_ptr(&self) -> *const Self::Elem;
}

/// A destination that accepts values of type `T` at its current position.
pub trait Writable<T> {
    /// Writes `value` at the current position without advancing.
    fn write(&mut self, value: T);
}

/// An end-marker for cursors of type `C`.
pub trait Sentinel<C> {
    /// Returns `true` when `cursor` has reached this end-marker.
    fn is_end(&self, cursor: &C) -> bool;
}

impl<C> Sentinel<C> for C
where
    C: Cursor + PartialEq,
{
    #[inline(always)]
    fn is_end(&self, cursor: &C) -> bool {
        self == cursor
    }
}

/// An end-marker that knows how far away a cursor is.
pub trait SizedSentinel<C>: Sentinel<C> {
    /// Returns the number of advances needed to move `cursor` onto `self`.
    fn distance_from(&self, cursor: &C) -> usize;
}

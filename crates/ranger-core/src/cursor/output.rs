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

//! Appending destination cursor.
//!
//! `BackInserter` turns a `Vec<T>` into an unbounded destination: every
//! write pushes, and advancing is a no-op. Algorithms that write "one element
//! per step" work unchanged, and the caller no longer has to size the output
//! up front.

use crate::cursor::{Cursor, Writable};

/// A destination cursor that appends every written value to a vector.
#[derive(Debug)]
pub struct BackInserter<'a, T> {
    vec: &'a mut Vec<T>,
}

impl<'a, T> BackInserter<'a, T> {
    /// Creates an inserter appending to `vec`.
    #[inline(always)]
    pub fn new(vec: &'a mut Vec<T>) -> Self {
        Self { vec }
    }

    /// Returns the number of elements currently in the target vector.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns `true` if the target vector is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}

/// Creates a `BackInserter` appending to `vec`.
#[inline(always)]
pub fn back_inserter<T>(vec: &mut Vec<T>) -> BackInserter<'_, T> {
    BackInserter::new(vec)
}

impl<T> Cursor for BackInserter<'_, T> {
    #[inline(always)]
    fn advance(&mut self) {}
}

impl<T> Writable<T> for BackInserter<'_, T> {
    #[inline(always)]
    fn write(&mut self, value: T) {
        self.vec.push(value);
    }
}

impl<'v, T> Writable<&'v T> for BackInserter<'_, T>
where
    T: Clone,
{
    #[inline(always)]
    fn write(&mut self, value: &'v T) {
        self.vec.push(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_inserter_appends_owned_and_borrowed() {
        let mut v: Vec<i32> = vec![1];
        {
            let mut out = back_inserter(&mut v);
            out.write(2);
            out.advance();
            out.write(&3);
            out.advance();
            assert_eq!(out.len(), 3);
            assert!(!out.is_empty());
        }
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_back_inserter_advance_does_not_write() {
        let mut v: Vec<i32> = Vec::new();
        let mut out = BackInserter::new(&mut v);
        out.advance();
        out.advance();
        assert!(out.is_empty());
    }
}

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

//! Counting cursor over primitive integers.
//!
//! `Iota<T>` reads as its own current value and advances by one. Paired with
//! another `Iota` as its end-marker it forms the half-open integer range
//! `[start, end)` without any backing storage, which makes it a convenient
//! source for algorithms that only need to read values.

use crate::cursor::{BidirectionalCursor, Cursor, InputCursor, SizedSentinel};
use num_traits::PrimInt;

/// A cursor producing consecutive integers.
///
/// # Examples
///
/// ```rust
/// # use ranger_core::cursor::iota::Iota;
/// # use ranger_core::cursor::{Cursor, InputCursor};
/// let mut c = Iota::new(5u32);
/// assert_eq!(c.read(), 5);
/// c.advance();
/// assert_eq!(c.read(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iota<T>
where
    T: PrimInt,
{
    value: T,
}

impl<T> Iota<T>
where
    T: PrimInt,
{
    /// Creates a cursor starting at `value`.
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the value the cursor currently designates.
    #[inline(always)]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> Cursor for Iota<T>
where
    T: PrimInt,
{
    #[inline(always)]
    fn advance(&mut self) {
        debug_assert!(
            self.value < T::max_value(),
            "called `Iota::advance` at the maximum value of the integer type"
        );
        self.value = self.value + T::one();
    }
}

impl<T> BidirectionalCursor for Iota<T>
where
    T: PrimInt,
{
    #[inline(always)]
    fn retreat(&mut self) {
        debug_assert!(
            self.value > T::min_value(),
            "called `Iota::retreat` at the minimum value of the integer type"
        );
        self.value = self.value - T::one();
    }
}

impl<T> InputCursor for Iota<T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline(always)]
    fn read(&self) -> T {
        self.value
    }
}

impl<T> SizedSentinel<Iota<T>> for Iota<T>
where
    T: PrimInt,
{
    #[inline]
    fn distance_from(&self, cursor: &Iota<T>) -> usize {
        if self.value <= cursor.value {
            return 0;
        }
        self.value
            .checked_sub(&cursor.value)
            .and_then(|d| d.to_usize())
            .unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Sentinel;

    #[test]
    fn test_iota_counts_up_to_end() {
        let mut c = Iota::new(-2i64);
        let end = Iota::new(2i64);
        let mut seen = Vec::new();
        while !end.is_end(&c) {
            seen.push(c.read());
            c.advance();
        }
        assert_eq!(seen, vec![-2, -1, 0, 1]);
    }

    #[test]
    fn test_iota_distance() {
        assert_eq!(Iota::new(10u8).distance_from(&Iota::new(3u8)), 7);
        assert_eq!(Iota::new(3u8).distance_from(&Iota::new(10u8)), 0);
        assert_eq!(Iota::new(-5i32).distance_from(&Iota::new(-5i32)), 0);
    }

    #[test]
    fn test_iota_retreat() {
        let mut c = Iota::new(1u16);
        c.retreat();
        assert_eq!(c.value(), 0);
    }
}

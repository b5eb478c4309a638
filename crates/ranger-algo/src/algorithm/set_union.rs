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

//! # Sorted-Merge Union
//!
//! Merges two ranges sorted by the same strict weak order into their multiset
//! union: an element occurring `m` times in the first input and `n` times in
//! the second occurs `max(m, n)` times in the output, which is itself sorted.
//!
//! ## Highlights
//!
//! - Single pass over both inputs, at most `len1 + len2` writes.
//! - Each input has its own projection; the comparator orders the projected
//!   keys, so the two inputs may hold different element types as long as they
//!   project to the same key type.
//! - For a pair of equivalent elements the one from the second input is
//!   written and both inputs advance.
//! - Once either input is exhausted, the rest of the other is copied.
//!
//! Sortedness of the inputs is a precondition and is not checked.
//!
//! ## Usage
//!
//! ```rust
//! use ranger_algo::algorithm::set_union::set_union;
//! use ranger_core::cursor::output::back_inserter;
//!
//! let a = [1, 3, 3, 5];
//! let b = [2, 3, 4];
//! let mut out: Vec<i32> = Vec::new();
//! set_union(&a, &b, back_inserter(&mut out));
//! assert_eq!(out, vec![1, 2, 3, 3, 4, 5]);
//! ```

use crate::algorithm::copy::{copy_until, emit};
use ranger_core::access::Range;
use ranger_core::cursor::{Cursor, InputCursor, Sentinel, Writable};
use ranger_core::functional::{Comparator, Identity, Less, Projection};
use ranger_core::result::In1In2OutResult;

/// Merges `range1` and `range2`, both sorted ascending, into `out`.
///
/// Equivalent to [`set_union_by_key`] with `Less` and `Identity` projections.
#[inline]
pub fn set_union<R1, R2, O, T>(
    range1: R1,
    range2: R2,
    out: O,
) -> In1In2OutResult<R1::Cursor, R2::Cursor, O>
where
    R1: Range,
    R2: Range,
    R1::Cursor: InputCursor<Item = T>,
    R2::Cursor: InputCursor<Item = T>,
    T: PartialOrd,
    O: Cursor + Writable<T>,
{
    set_union_by_key(range1, range2, out, Less, Identity, Identity)
}

/// Merges `range1` and `range2`, both sorted by `comp`, into `out`.
///
/// # Examples
///
/// ```rust
/// use ranger_algo::algorithm::set_union::set_union_by;
/// use ranger_core::cursor::output::back_inserter;
///
/// let a = vec![9, 4, 1];
/// let b = vec![8, 4, 2];
/// let mut out: Vec<i32> = Vec::new();
/// set_union_by(&a, &b, back_inserter(&mut out), |x: &i32, y: &i32| x > y);
/// assert_eq!(out, vec![9, 8, 4, 2, 1]);
/// ```
#[inline]
pub fn set_union_by<R1, R2, O, C, T>(
    range1: R1,
    range2: R2,
    out: O,
    comp: C,
) -> In1In2OutResult<R1::Cursor, R2::Cursor, O>
where
    R1: Range,
    R2: Range,
    R1::Cursor: InputCursor<Item = T>,
    R2::Cursor: InputCursor<Item = T>,
    C: Comparator<T>,
    O: Cursor + Writable<T>,
{
    set_union_by_key(range1, range2, out, comp, Identity, Identity)
}

/// Merges `range1` and `range2` into `out`, ordering elements by
/// `comp(proj1(e1), proj2(e2))`.
///
/// Both inputs must be sorted with respect to `comp` applied to their
/// projections. While both inputs have elements:
///
/// - if `comp(proj1(e1), proj2(e2))`, `e1` is written and the first input
///   advances;
/// - otherwise `e2` is written and the second input advances, and if also
///   `!comp(proj2(e2), proj1(e1))` (the two are equivalent) the first input
///   advances as well.
///
/// Returns the end positions of both inputs and one past the last position
/// written.
///
/// # Examples
///
/// ```rust
/// use ranger_algo::algorithm::set_union::set_union_by_key;
/// use ranger_core::functional::Less;
///
/// struct Entry {
///     key: u32,
///     source: char,
/// }
///
/// let ours = [Entry { key: 1, source: 'a' }, Entry { key: 3, source: 'a' }];
/// let theirs = [Entry { key: 2, source: 'b' }, Entry { key: 3, source: 'b' }];
/// let mut sources: Vec<char> = Vec::new();
///
/// struct Sources<'a>(&'a mut Vec<char>);
///
/// impl ranger_core::cursor::Cursor for Sources<'_> {
///     fn advance(&mut self) {}
/// }
///
/// impl ranger_core::cursor::Writable<&Entry> for Sources<'_> {
///     fn write(&mut self, e: &Entry) {
///         self.0.push(e.source);
///     }
/// }
///
/// set_union_by_key(
///     &ours,
///     &theirs,
///     Sources(&mut sources),
///     Less,
///     |e: &Entry| e.key,
///     |e: &Entry| e.key,
/// );
/// assert_eq!(sources, vec!['a', 'b', 'b']);
/// ```
#[inline]
pub fn set_union_by_key<R1, R2, O, C, P1, P2, K>(
    range1: R1,
    range2: R2,
    mut out: O,
    mut comp: C,
    proj1: P1,
    proj2: P2,
) -> In1In2OutResult<R1::Cursor, R2::Cursor, O>
where
    R1: Range,
    R2: Range,
    R1::Cursor: InputCursor,
    R2::Cursor: InputCursor,
    P1: Projection<<R1::Cursor as InputCursor>::Item, Output = K>,
    P2: Projection<<R2::Cursor as InputCursor>::Item, Output = K>,
    C: Comparator<K>,
    O: Cursor
        + Writable<<R1::Cursor as InputCursor>::Item>
        + Writable<<R2::Cursor as InputCursor>::Item>,
{
    let mut first1 = range1.begin();
    let last1 = range1.end();
    let mut first2 = range2.begin();
    let last2 = range2.end();

    while !last1.is_end(&first1) && !last2.is_end(&first2) {
        if comp.compare(proj1.project(first1.read()), proj2.project(first2.read())) {
            emit(&mut out, first1.read());
            first1.advance();
        } else {
            if !comp.compare(proj2.project(first2.read()), proj1.project(first1.read())) {
                first1.advance();
            }
            emit(&mut out, first2.read());
            first2.advance();
        }
    }

    let (first1, out) = copy_until(first1, &last1, out);
    let (first2, out) = copy_until(first2, &last2, out);
    In1In2OutResult::new(first1, first2, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use ranger_core::access::Bounds;
    use ranger_core::cursor::iota::Iota;
    use ranger_core::cursor::output::back_inserter;
    use ranger_core::cursor::slice::{SliceCursor, SliceCursorMut};
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        key: i32,
        tag: &'static str,
    }

    fn tagged(key: i32, tag: &'static str) -> Tagged {
        Tagged { key, tag }
    }

    #[test]
    fn test_set_union_keeps_max_multiplicity() {
        let a = [1, 3, 3, 5];
        let b = [2, 3, 4];
        let mut out: Vec<i32> = Vec::new();

        let r = set_union(&a, &b, back_inserter(&mut out));

        assert_eq!(r.input1.position(), 4);
        assert_eq!(r.input2.position(), 3);
        assert_eq!(out, vec![1, 2, 3, 3, 4, 5]);
    }

    #[test]
    fn test_set_union_with_empty_first_input() {
        let a: [i32; 0] = [];
        let b = [1, 2, 3];
        let mut out: Vec<i32> = Vec::new();

        let r = set_union(&a, &b, back_inserter(&mut out));

        assert_eq!(r.input1, SliceCursor::new(&a));
        assert_eq!(r.input2.position(), 3);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_set_union_with_empty_second_input() {
        let a = vec![4, 4, 6];
        let b: Vec<i32> = Vec::new();
        let mut dst = [0; 3];

        let r = set_union(&a, &b, SliceCursorMut::new(&mut dst));

        assert_eq!(r.input2.position(), 0);
        assert_eq!(r.output.position(), 3);
        assert_eq!(dst, [4, 4, 6]);
    }

    #[test]
    fn test_set_union_equivalent_elements_come_from_second_input() {
        let a = [tagged(1, "a"), tagged(2, "a")];
        let b = [tagged(2, "b"), tagged(3, "b")];
        let mut out: Vec<Tagged> = Vec::new();

        set_union_by_key(
            &a,
            &b,
            back_inserter(&mut out),
            Less,
            |t: &Tagged| t.key,
            |t: &Tagged| t.key,
        );

        assert_eq!(out, vec![tagged(1, "a"), tagged(2, "b"), tagged(3, "b")]);
    }

    /// Records the key and tag of everything written, from either input type.
    #[derive(Default)]
    struct KeySink {
        keys: Vec<(i32, &'static str)>,
    }

    impl Cursor for KeySink {
        fn advance(&mut self) {}
    }

    impl Writable<&Tagged> for KeySink {
        fn write(&mut self, t: &Tagged) {
            self.keys.push((t.key, t.tag));
        }
    }

    impl Writable<i32> for KeySink {
        fn write(&mut self, key: i32) {
            self.keys.push((key, "iota"));
        }
    }

    #[test]
    fn test_set_union_by_key_with_different_element_types() {
        let a = [tagged(1, "x"), tagged(3, "y")];
        let b = Bounds::new(Iota::new(2i32), Iota::new(5i32));

        let r = set_union_by_key(
            &a,
            b,
            KeySink::default(),
            Less,
            |t: &Tagged| t.key,
            |k: i32| k,
        );

        assert_eq!(r.input1.position(), 2);
        assert_eq!(r.input2.value(), 5);
        assert_eq!(
            r.output.keys,
            vec![(1, "x"), (2, "iota"), (3, "iota"), (4, "iota")]
        );
    }

    #[test]
    fn test_set_union_stateful_comparator_keeps_state() {
        let a = [1, 2, 3];
        let b = [2, 3, 4];
        let mut calls = 0usize;
        let mut counting = |x: &i32, y: &i32| {
            calls += 1;
            x < y
        };
        let mut out: Vec<i32> = Vec::new();

        set_union_by(&a, &b, back_inserter(&mut out), &mut counting);

        assert_eq!(out, vec![1, 2, 3, 4]);
        // One comparison for 1 vs 2, two for each tie; 4 is copied.
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_set_union_randomized_matches_multiset_union() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..64 {
            let mut a: Vec<u8> = (0..rng.random_range(0..40))
                .map(|_| rng.random_range(0..16))
                .collect();
            let mut b: Vec<u8> = (0..rng.random_range(0..40))
                .map(|_| rng.random_range(0..16))
                .collect();
            a.sort_unstable();
            b.sort_unstable();

            let mut out: Vec<u8> = Vec::new();
            let r = set_union(&a, &b, back_inserter(&mut out));
            assert_eq!(r.input1.position(), a.len());
            assert_eq!(r.input2.position(), b.len());

            let mut counts: BTreeMap<u8, (usize, usize)> = BTreeMap::new();
            for x in &a {
                counts.entry(*x).or_default().0 += 1;
            }
            for x in &b {
                counts.entry(*x).or_default().1 += 1;
            }
            let expected: Vec<u8> = counts
                .iter()
                .flat_map(|(k, (m, n))| std::iter::repeat(*k).take(*m.max(n)))
                .collect();

            assert_eq!(out, expected);
        }
    }
}

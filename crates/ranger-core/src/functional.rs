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

//! # Projection, Comparator, and Predicate Adapters
//!
//! Algorithms never call user callables directly; they go through three small
//! traits so that a closure, a function item, or one of the provided unit
//! types can all be passed in the same parameter position.
//!
//! - `Projection<T>`: a pure `T -> Output` transform applied before comparing
//!   or testing. `Identity` is the default. Field selectors are plain closures
//!   such as `|p: &Pair| p.key`.
//! - `Comparator<K>`: a strict weak order `(K, K) -> bool`. `Less` is the
//!   default ascending order, `Greater` the descending one.
//! - `Predicate<K>`: a boolean test `K -> bool`.
//!
//! Adapters are taken by value and are never cloned by the algorithms. A
//! caller that wants to observe the state a comparator accumulates passes
//! `&mut f` instead of `f`; `&mut F` is itself a comparator, so the state
//! stays with the caller.
//!
//! ```rust
//! use ranger_core::functional::{Comparator, Identity, Less, Predicate, Projection};
//!
//! assert_eq!(Identity.project(7), 7);
//! assert!(Less.compare(1, 2));
//!
//! let mut calls = 0;
//! let mut is_even = |x: i32| {
//!     calls += 1;
//!     x % 2 == 0
//! };
//! assert!((&mut is_even).test(4));
//! assert!(!(&mut is_even).test(5));
//! assert_eq!(calls, 2);
//! ```

/// A pure transform applied to an element before it is compared or tested.
pub trait Projection<T> {
    /// The projected key type.
    type Output;

    /// Projects `value` to its key.
    fn project(&self, value: T) -> Self::Output;
}

/// A strict weak ordering over keys of type `K`.
pub trait Comparator<K> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn compare(&mut self, a: K, b: K) -> bool;
}

/// A boolean test over keys of type `K`.
pub trait Predicate<K> {
    /// Returns `true` if `value` satisfies the predicate.
    fn test(&mut self, value: K) -> bool;
}

/// The identity projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T> Projection<T> for Identity {
    type Output = T;

    #[inline(always)]
    fn project(&self, value: T) -> T {
        value
    }
}

impl<F, T, U> Projection<T> for F
where
    F: Fn(T) -> U,
{
    type Output = U;

    #[inline(always)]
    fn project(&self, value: T) -> U {
        self(value)
    }
}

/// Ascending order through `PartialOrd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<K> Comparator<K> for Less
where
    K: PartialOrd,
{
    #[inline(always)]
    fn compare(&mut self, a: K, b: K) -> bool {
        a < b
    }
}

/// Descending order through `PartialOrd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<K> Comparator<K> for Greater
where
    K: PartialOrd,
{
    #[inline(always)]
    fn compare(&mut self, a: K, b: K) -> bool {
        a > b
    }
}

impl<F, K> Comparator<K> for F
where
    F: FnMut(K, K) -> bool,
{
    #[inline(always)]
    fn compare(&mut self, a: K, b: K) -> bool {
        self(a, b)
    }
}

impl<F, K> Predicate<K> for F
where
    F: FnMut(K) -> bool,
{
    #[inline(always)]
    fn test(&mut self, value: K) -> bool {
        self(value)
    }
}

/// Returns `true` if `a` and `b` are equivalent under `comp`, i.e. neither is
/// ordered before the other.
#[inline(always)]
pub fn equivalent<K, C>(comp: &mut C, a: K, b: K) -> bool
where
    K: Copy,
    C: Comparator<K>,
{
    !comp.compare(a, b) && !comp.compare(b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct Pair {
        key: i32,
        #[allow(dead_code)]
        label: char,
    }

    fn negate(x: i32) -> i32 {
        -x
    }

    #[test]
    fn test_identity_preserves_references() {
        let v = 5;
        let r: &i32 = Identity.project(&v);
        assert!(std::ptr::eq(r, &v));
    }

    #[test]
    fn test_closure_and_fn_item_projections() {
        let p = Pair { key: 3, label: 'x' };
        let by_key = |p: &Pair| p.key;
        assert_eq!(by_key.project(&p), 3);
        assert_eq!(negate.project(4), -4);
    }

    #[test]
    fn test_less_and_greater() {
        assert!(Less.compare(1, 2));
        assert!(!Less.compare(2, 2));
        assert!(Greater.compare(3, 2));
        assert!(!Greater.compare(2, 3));
        assert!(Less.compare("a", "b"));
    }

    #[test]
    fn test_stateful_comparator_through_mut_reference_keeps_state() {
        let mut calls = 0usize;
        let mut counting = |a: i32, b: i32| {
            calls += 1;
            a < b
        };
        fn run<C: Comparator<i32>>(mut cmp: C) -> bool {
            cmp.compare(1, 2) && !cmp.compare(2, 1)
        }

        assert!(run(&mut counting));
        assert!(counting(0, 1));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_equivalent() {
        assert!(equivalent(&mut Less, 2, 2));
        assert!(!equivalent(&mut Less, 1, 2));

        let mut by_abs = |a: i32, b: i32| a.abs() < b.abs();
        assert!(equivalent(&mut by_abs, -3, 3));
    }

    #[test]
    fn test_predicate_closure() {
        let mut positive = |x: i32| x > 0;
        assert!(positive.test(1));
        assert!(!positive.test(-1));
    }
}

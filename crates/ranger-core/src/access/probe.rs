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

//! Ordered candidate probing for the access points.
//!
//! Every access point is a method name shared by a handful of strategy traits.
//! Each strategy is implemented on a different reference depth of `Probe<R>`:
//!
//! | depth          | begin / end | size     | empty    | data    | rbegin / rend |
//! |----------------|-------------|----------|----------|---------|---------------|
//! | `&&Probe<R>`   | member      | member   | member   | member  | bounded       |
//! | `&Probe<R>`    | hook        | distance | length   | builtin | member        |
//! | `Probe<R>`     | builtin     |          | bounds   |         |               |
//!
//! The macros call the method on `&&&probe`. Method resolution tries the
//! receiver as-is first and only auto-dereferences when no impl at that depth
//! applies, so the first strategy whose `where` clauses hold is the one that
//! runs. A strategy whose clauses fail is invisible; if none holds, the call
//! does not build.

use crate::access::members::{
    DataMember, EmptyMember, Hooks, Members, ReverseMembers, SizeMember,
};
use crate::access::Range;
use crate::cursor::reverse::Reverse;
use crate::cursor::slice::SliceCursor;
use crate::cursor::{BidirectionalCursor, Cursor, Sentinel, SizedSentinel};
use std::marker::PhantomData;

/// The probed range value.
#[doc(hidden)]
#[repr(transparent)]
pub struct Probe<R>(R);

impl<R> Probe<R> {
    #[inline(always)]
    pub fn new(range: R) -> Self {
        Self(range)
    }
}

/// Asserts that `end` can terminate traversal of the cursor type carried by
/// `marker`, and hands `end` back unchanged.
#[doc(hidden)]
#[inline(always)]
pub fn expect_sentinel<C, S>(_marker: PhantomData<C>, end: S) -> S
where
    S: Sentinel<C>,
{
    end
}

#[doc(hidden)]
pub mod strategy {
    use super::*;

    // begin

    pub trait BeginViaMember {
        type Cursor;
        fn resolve_begin(&self) -> Self::Cursor;
        #[inline(always)]
        fn begin_marker(&self) -> PhantomData<Self::Cursor> {
            PhantomData
        }
    }

    impl<R> BeginViaMember for &&Probe<R>
    where
        R: Members,
        R::Cursor: Cursor,
    {
        type Cursor = R::Cursor;

        #[inline(always)]
        fn resolve_begin(&self) -> R::Cursor {
            Members::begin(&self.0)
        }
    }

    pub trait BeginViaHook {
        type Cursor;
        fn resolve_begin(&self) -> Self::Cursor;
        #[inline(always)]
        fn begin_marker(&self) -> PhantomData<Self::Cursor> {
            PhantomData
        }
    }

    impl<R> BeginViaHook for &Probe<R>
    where
        R: Hooks,
        R::Cursor: Cursor,
    {
        type Cursor = R::Cursor;

        #[inline(always)]
        fn resolve_begin(&self) -> R::Cursor {
            R::begin_of(&self.0)
        }
    }

    pub trait BeginViaBuiltin {
        type Cursor;
        fn resolve_begin(&self) -> Self::Cursor;
        #[inline(always)]
        fn begin_marker(&self) -> PhantomData<Self::Cursor> {
            PhantomData
        }
    }

    impl<'a, T, const N: usize> BeginViaBuiltin for Probe<&'a [T; N]> {
        type Cursor = SliceCursor<'a, T>;

        #[inline(always)]
        fn resolve_begin(&self) -> SliceCursor<'a, T> {
            SliceCursor::new(self.0)
        }
    }

    impl<'a, T> BeginViaBuiltin for Probe<&'a [T]> {
        type Cursor = SliceCursor<'a, T>;

        #[inline(always)]
        fn resolve_begin(&self) -> SliceCursor<'a, T> {
            SliceCursor::new(self.0)
        }
    }

    // end

    pub trait EndViaMember {
        type End;
        fn resolve_end(&self) -> Self::End;
    }

    #[cfg(not(feature = "strict-sentinel"))]
    impl<R> EndViaMember for &&Probe<R>
    where
        R: Members,
    {
        type End = R::End;

        #[inline(always)]
        fn resolve_end(&self) -> R::End {
            Members::end(&self.0)
        }
    }

    #[cfg(feature = "strict-sentinel")]
    impl<R> EndViaMember for &&Probe<R>
    where
        R: Members,
        R::End: Sentinel<R::Cursor>,
    {
        type End = R::End;

        #[inline(always)]
        fn resolve_end(&self) -> R::End {
            Members::end(&self.0)
        }
    }

    pub trait EndViaHook {
        type End;
        fn resolve_end(&self) -> Self::End;
    }

    #[cfg(not(feature = "strict-sentinel"))]
    impl<R> EndViaHook for &Probe<R>
    where
        R: Hooks,
    {
        type End = R::End;

        #[inline(always)]
        fn resolve_end(&self) -> R::End {
            R::end_of(&self.0)
        }
    }

    #[cfg(feature = "strict-sentinel")]
    impl<R> EndViaHook for &Probe<R>
    where
        R: Hooks,
        R::End: Sentinel<R::Cursor>,
    {
        type End = R::End;

        #[inline(always)]
        fn resolve_end(&self) -> R::End {
            R::end_of(&self.0)
        }
    }

    pub trait EndViaBuiltin {
        type End;
        fn resolve_end(&self) -> Self::End;
    }

    impl<'a, T, const N: usize> EndViaBuiltin for Probe<&'a [T; N]> {
        type End = SliceCursor<'a, T>;

        #[inline(always)]
        fn resolve_end(&self) -> SliceCursor<'a, T> {
            SliceCursor::at_end(self.0)
        }
    }

    impl<'a, T> EndViaBuiltin for Probe<&'a [T]> {
        type End = SliceCursor<'a, T>;

        #[inline(always)]
        fn resolve_end(&self) -> SliceCursor<'a, T> {
            SliceCursor::at_end(self.0)
        }
    }

    // rbegin / rend

    pub trait RBeginViaBounded {
        type Cursor;
        fn resolve_rbegin(&self) -> Self::Cursor;
        #[inline(always)]
        fn rbegin_marker(&self) -> PhantomData<Self::Cursor> {
            PhantomData
        }
    }

    impl<R, C> RBeginViaBounded for &&Probe<R>
    where
        R: Range<Cursor = C, End = C>,
        C: BidirectionalCursor + PartialEq,
    {
        type Cursor = Reverse<C>;

        #[inline(always)]
        fn resolve_rbegin(&self) -> Reverse<C> {
            Reverse::new(Range::end(&self.0))
        }
    }

    pub trait RBeginViaMember {
        type Cursor;
        fn resolve_rbegin(&self) -> Self::Cursor;
        #[inline(always)]
        fn rbegin_marker(&self) -> PhantomData<Self::Cursor> {
            PhantomData
        }
    }

    impl<R> RBeginViaMember for &Probe<R>
    where
        R: ReverseMembers,
        R::RevCursor: Cursor,
    {
        type Cursor = R::RevCursor;

        #[inline(always)]
        fn resolve_rbegin(&self) -> R::RevCursor {
            ReverseMembers::rbegin(&self.0)
        }
    }

    pub trait REndViaBounded {
        type End;
        fn resolve_rend(&self) -> Self::End;
    }

    impl<R, C> REndViaBounded for &&Probe<R>
    where
        R: Range<Cursor = C, End = C>,
        C: BidirectionalCursor + PartialEq,
    {
        type End = Reverse<C>;

        #[inline(always)]
        fn resolve_rend(&self) -> Reverse<C> {
            Reverse::new(Range::begin(&self.0))
        }
    }

    pub trait REndViaMember {
        type End;
        fn resolve_rend(&self) -> Self::End;
    }

    impl<R> REndViaMember for &Probe<R>
    where
        R: ReverseMembers,
    {
        type End = R::RevEnd;

        #[inline(always)]
        fn resolve_rend(&self) -> R::RevEnd {
            ReverseMembers::rend(&self.0)
        }
    }

    // size

    pub trait SizeViaMember {
        fn resolve_size(&self) -> usize;
    }

    impl<R> SizeViaMember for &&Probe<R>
    where
        R: SizeMember,
    {
        #[inline(always)]
        fn resolve_size(&self) -> usize {
            SizeMember::size(&self.0)
        }
    }

    pub trait SizeViaDistance {
        fn resolve_size(&self) -> usize;
    }

    impl<R> SizeViaDistance for &Probe<R>
    where
        R: Range,
        R::End: SizedSentinel<R::Cursor>,
    {
        #[inline(always)]
        fn resolve_size(&self) -> usize {
            Range::end(&self.0).distance_from(&Range::begin(&self.0))
        }
    }

    // empty

    pub trait EmptyViaMember {
        fn resolve_empty(&self) -> bool;
    }

    impl<R> EmptyViaMember for &&Probe<R>
    where
        R: EmptyMember,
    {
        #[inline(always)]
        fn resolve_empty(&self) -> bool {
            EmptyMember::empty(&self.0).into()
        }
    }

    pub trait EmptyViaLength {
        fn resolve_empty(&self) -> bool;
    }

    impl<T, const N: usize> EmptyViaLength for &Probe<&[T; N]> {
        #[inline(always)]
        fn resolve_empty(&self) -> bool {
            N == 0
        }
    }

    impl<T> EmptyViaLength for &Probe<&[T]> {
        #[inline(always)]
        fn resolve_empty(&self) -> bool {
            self.0.is_empty()
        }
    }

    pub trait EmptyViaBounds {
        fn resolve_empty(&self) -> bool;
    }

    impl<R> EmptyViaBounds for Probe<R>
    where
        R: Range,
    {
        #[inline(always)]
        fn resolve_empty(&self) -> bool {
            Range::end(&self.0).is_end(&Range::begin(&self.0))
        }
    }

    // data

    pub trait DataViaMember {
        type Elem;
        fn resolve_data(&self) -> *const Self::Elem;
    }

    impl<R> DataViaMember for &&Probe<R>
    where
        R: DataMember,
    {
        type Elem = R::Elem;

        #[inline(always)]
        fn resolve_data(&self) -> *const R::Elem {
            DataMember::data(&self.0)
        }
    }

    pub trait DataViaBuiltin {
        type Elem;
        fn resolve_data(&self) -> *const Self::Elem;
    }

    impl<T, const N: usize> DataViaBuiltin for &Probe<&[T; N]> {
        type Elem = T;

        #[inline(always)]
        fn resolve_data(&self) -> *const T {
            self.0.as_ptr()
        }
    }

    impl<T> DataViaBuiltin for &Probe<&[T]> {
        type Elem = T;

        #[inline(always)]
        fn resolve_data(&self) -> *const T {
            self.0.as_ptr()
        }
    }
}

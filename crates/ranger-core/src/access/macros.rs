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

//! The access-point macros.
//!
//! Each macro wraps its argument in a `Probe` and calls the access point's
//! method on `&&&probe`, with every strategy trait for that point imported
//! anonymously. See `access::probe` for the precedence table.

/// Resolves the cursor at the first element of a range.
///
/// Precedence: member `begin` (`Members`), then the `Hooks` accessor, then the
/// built-in array/slice cursor.
///
/// # Examples
///
/// ```rust
/// use ranger_core::cursor::InputCursor;
///
/// let v = vec![4, 5, 6];
/// assert_eq!(*ranger_core::begin!(&v).read(), 4);
///
/// let a = [7, 8];
/// assert_eq!(*ranger_core::begin!(&a).read(), 7);
/// ```
///
/// A type without any accessor is rejected at build time:
///
/// ```rust,compile_fail
/// struct Opaque;
/// let _ = ranger_core::begin!(&Opaque);
/// ```
#[macro_export]
macro_rules! begin {
    ($range:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::access::strategy::{
            BeginViaBuiltin as _, BeginViaHook as _, BeginViaMember as _,
        };
        match $crate::access::Probe::new($range) {
            probe => (&&&probe).resolve_begin(),
        }
    }};
}

/// Resolves the end-marker of a range.
///
/// Uses the same precedence as [`begin!`]. The result is checked to be a
/// `Sentinel` for the cursor `begin!` resolves on the same range. Without the
/// `strict-sentinel` feature an incompatible end-marker is a build error at
/// the call site; with it, the incompatible candidate is skipped and the next
/// one is probed.
#[macro_export]
macro_rules! end {
    ($range:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::access::strategy::{
            BeginViaBuiltin as _, BeginViaHook as _, BeginViaMember as _, EndViaBuiltin as _,
            EndViaHook as _, EndViaMember as _,
        };
        match $crate::access::Probe::new($range) {
            probe => {
                let end = (&&&probe).resolve_end();
                $crate::access::expect_sentinel((&&&probe).begin_marker(), end)
            }
        }
    }};
}

/// [`begin!`] on the read-only view of a range.
///
/// ```rust
/// use ranger_core::cursor::InputCursor;
///
/// let mut v = vec![1, 2];
/// let first: &i32 = ranger_core::cbegin!(&mut v).read();
/// assert_eq!(*first, 1);
/// ```
#[macro_export]
macro_rules! cbegin {
    ($range:expr $(,)?) => {
        $crate::begin!($crate::access::as_const($range))
    };
}

/// [`end!`] on the read-only view of a range.
#[macro_export]
macro_rules! cend {
    ($range:expr $(,)?) => {
        $crate::end!($crate::access::as_const($range))
    };
}

/// Resolves a cursor at the last element of a range, walking backwards.
///
/// A bounded range (a `Range` whose cursor and end-marker share a
/// bidirectional type) gets a synthesized `Reverse` of its end. Otherwise the
/// member `rbegin` (`ReverseMembers`) is used.
///
/// ```rust
/// use ranger_core::cursor::InputCursor;
///
/// let a = [1, 2, 3];
/// assert_eq!(*ranger_core::rbegin!(&a).read(), 3);
/// ```
#[macro_export]
macro_rules! rbegin {
    ($range:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::access::strategy::{RBeginViaBounded as _, RBeginViaMember as _};
        match $crate::access::Probe::new($range) {
            probe => (&&&probe).resolve_rbegin(),
        }
    }};
}

/// Resolves the end-marker of the reversed traversal of a range.
#[macro_export]
macro_rules! rend {
    ($range:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::access::strategy::{
            RBeginViaBounded as _, RBeginViaMember as _, REndViaBounded as _,
            REndViaMember as _,
        };
        match $crate::access::Probe::new($range) {
            probe => {
                let end = (&&&probe).resolve_rend();
                $crate::access::expect_sentinel((&&&probe).rbegin_marker(), end)
            }
        }
    }};
}

/// [`rbegin!`] on the read-only view of a range.
#[macro_export]
macro_rules! crbegin {
    ($range:expr $(,)?) => {
        $crate::rbegin!($crate::access::as_const($range))
    };
}

/// [`rend!`] on the read-only view of a range.
#[macro_export]
macro_rules! crend {
    ($range:expr $(,)?) => {
        $crate::rend!($crate::access::as_const($range))
    };
}

/// Resolves the element count of a range.
///
/// Precedence: member `size` (`SizeMember`), then the distance between the
/// resolved begin and end when the end-marker is a `SizedSentinel`.
///
/// ```rust
/// let a = [1, 2, 3];
/// assert_eq!(ranger_core::size!(&a), 3);
/// ```
#[macro_export]
macro_rules! size {
    ($range:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::access::strategy::{SizeViaDistance as _, SizeViaMember as _};
        match $crate::access::Probe::new($range) {
            probe => (&&&probe).resolve_size(),
        }
    }};
}

/// Resolves whether a range has no elements.
///
/// Precedence: member `empty` (`EmptyMember`, converted to `bool`), then the
/// array/slice length, then comparing the resolved begin against the end.
///
/// ```rust
/// let none: [u8; 0] = [];
/// assert!(ranger_core::empty!(&none));
/// assert!(!ranger_core::empty!(&vec![1]));
/// ```
#[macro_export]
macro_rules! empty {
    ($range:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::access::strategy::{
            EmptyViaBounds as _, EmptyViaLength as _, EmptyViaMember as _,
        };
        match $crate::access::Probe::new($range) {
            probe => (&&&probe).resolve_empty(),
        }
    }};
}

/// Resolves a pointer to the contiguous storage of a range.
///
/// Precedence: member `data` (`DataMember`), then the array/slice storage.
///
/// ```rust
/// let a = [1u16, 2];
/// assert_eq!(ranger_core::data!(&a), a.as_ptr());
/// ```
#[macro_export]
macro_rules! data {
    ($range:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::access::strategy::{DataViaBuiltin as _, DataViaMember as _};
        match $crate::access::Probe::new($range) {
            probe => (&&&probe).resolve_data(),
        }
    }};
}

/// Implements `Range` for a borrowed range type by routing its `begin`/`end`
/// through [`begin!`] and [`end!`].
///
/// Generic code bounded on `Range` therefore sees exactly the implementation
/// the probes select for concrete values. The listed cursor and end-marker
/// types must match what the probes resolve, or the impl does not build.
///
/// ```rust
/// use ranger_core::access::members::Members;
/// use ranger_core::cursor::slice::SliceCursor;
///
/// struct Window {
///     data: Vec<u32>,
///     from: usize,
/// }
///
/// impl<'a> Members for &'a Window {
///     type Cursor = SliceCursor<'a, u32>;
///     type End = SliceCursor<'a, u32>;
///
///     fn begin(&self) -> Self::Cursor {
///         let w: &'a Window = *self;
///         SliceCursor::at(&w.data, w.from)
///     }
///
///     fn end(&self) -> Self::End {
///         let w: &'a Window = *self;
///         SliceCursor::at_end(&w.data)
///     }
/// }
///
/// ranger_core::range_access!(impl['a] &'a Window => SliceCursor<'a, u32>, SliceCursor<'a, u32>);
///
/// let w = Window { data: vec![1, 2, 3], from: 1 };
/// assert_eq!(ranger_core::access::begin(&&w).position(), 1);
/// ```
#[macro_export]
macro_rules! range_access {
    (impl [$($gen:tt)*] $ty:ty => $cursor:ty, $end:ty $(where $($bound:tt)*)?) => {
        impl<$($gen)*> $crate::access::Range for $ty $(where $($bound)*)? {
            type Cursor = $cursor;
            type End = $end;

            #[inline(always)]
            fn begin(&self) -> $cursor {
                $crate::begin!(*self)
            }

            #[inline(always)]
            fn end(&self) -> $end {
                $crate::end!(*self)
            }
        }
    };
}

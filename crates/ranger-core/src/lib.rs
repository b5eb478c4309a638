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

//! # Ranger Core
//!
//! The building blocks the generic range algorithms in `ranger-algo` are
//! written against. Every question an algorithm asks of its inputs ("can this
//! be read?", "where does this range start?", "how are two keys ordered?") is
//! answered at build time by a trait bound, so a mismatch is a compile error
//! and never a runtime branch.
//!
//! ## Modules
//!
//! - `cursor`: The capability traits (`Cursor`, `InputCursor`,
//!   `BidirectionalCursor`, `ContiguousCursor`, `Writable<T>`, `Sentinel<C>`,
//!   `SizedSentinel<C>`) and the stock cursors: `SliceCursor`,
//!   `SliceCursorMut`, `BackInserter`, `Reverse`, `Iota`, and the
//!   `CursorIter` bridge into `Iterator`.
//! - `access`: Range access resolution. Members take precedence over hooks,
//!   which take precedence over the built-in array/slice fallback. Exposed
//!   through the `begin!`/`end!`/`size!`/`empty!`/`data!` macro family for
//!   concrete values and through the `Range` trait for generic code.
//! - `functional`: `Projection`, `Comparator`, and `Predicate`, with
//!   `Identity`, `Less`, and `Greater` as defaults and blanket impls for
//!   closures.
//! - `result`: The named result records (`InOutResult`, `In1In2OutResult`).
//!
//! ## Features
//!
//! - `strict-sentinel`: An end-marker that cannot terminate the resolved
//!   begin cursor disqualifies its strategy, and the next one is probed.
//!   Without it, the first present end-marker is selected and a mismatch is a
//!   build error.

pub mod access;
pub mod cursor;
pub mod functional;
pub mod result;

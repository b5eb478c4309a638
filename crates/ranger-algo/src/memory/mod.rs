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

//! # Temporary Arena
//!
//! Scratch memory for algorithms that need auxiliary storage for the duration
//! of a single call.
//!
//! - `buffer`: `TemporaryBuffer<T>`, an owned, possibly over-aligned block of
//!   uninitialized slots that degrades to fewer (or zero) slots instead of
//!   failing.
//! - `vector`: `TemporaryVector<'b, T>`, a bump-pointer view that constructs
//!   and destroys elements inside one buffer, and `CapacityError<T>`.
//!
//! Neither type is `Send` or `Sync`; the arena belongs to the call that
//! allocated it.

pub mod buffer;
pub mod vector;

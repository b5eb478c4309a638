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

//! # Ranger Algo
//!
//! Generic range algorithms and the scratch arena they can draw on, built on
//! the cursor capabilities and range access of `ranger-core`.
//!
//! ## Modules
//!
//! - `algorithm`: `copy`, the filter-copy `replace_copy_if` family, and the
//!   sorted-merge `set_union` family. Each takes `Range` inputs, a writable
//!   destination cursor, and optional projection/comparator adapters, and
//!   returns the final cursor positions as a named record.
//! - `memory`: `TemporaryBuffer` and `TemporaryVector`, an allocation that
//!   degrades instead of failing and an in-place, never-reallocating vector
//!   over it.
//!
//! ## Logging
//!
//! Arena allocation is reported through the `log` facade (`trace` for
//! successful allocations, `debug` when a buffer comes back smaller than
//! requested). No logger is installed by this crate.

pub mod algorithm;
pub mod memory;

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

//! # Range Algorithms
//!
//! Every algorithm follows the same shape: it takes its inputs as `Range`
//! values, its destination as a writable cursor, and optional projection and
//! comparator/predicate adapters, and returns a named record of the final
//! position of every cursor it advanced. The variants are separate functions
//! rather than optional arguments:
//!
//! - `copy`: `copy(range, out)`.
//! - `replace_copy_if`: `replace_copy_if(range, out, pred, &value)` and
//!   `replace_copy_if_by(..., proj)`.
//! - `set_union`: `set_union(r1, r2, out)`, `set_union_by(..., comp)` and
//!   `set_union_by_key(..., comp, proj1, proj2)`.
//!
//! What an algorithm requires of its arguments is spelled out as bounds on the
//! cursor capability traits, so handing it an unreadable range or a
//! destination that cannot accept the element type fails to build.

pub mod copy;
pub mod replace_copy_if;
pub mod set_union;

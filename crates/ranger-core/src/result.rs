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

//! Named result records returned by the algorithms.
//!
//! Algorithms report every cursor they advanced, so a caller can resume from
//! where the traversal stopped. The fields are named instead of positional to
//! keep call sites readable when both inputs have the same type.

/// The final positions of a single-input, single-output algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InOutResult<I, O> {
    /// Where the input traversal stopped (its end position).
    pub input: I,
    /// One past the last position written.
    pub output: O,
}

impl<I, O> InOutResult<I, O> {
    /// Creates a new result record.
    #[inline(always)]
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

impl<I, O> From<InOutResult<I, O>> for (I, O) {
    #[inline(always)]
    fn from(r: InOutResult<I, O>) -> Self {
        (r.input, r.output)
    }
}

/// The final positions of a two-input, single-output algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct In1In2OutResult<I1, I2, O> {
    /// Where the first input traversal stopped.
    pub input1: I1,
    /// Where the second input traversal stopped.
    pub input2: I2,
    /// One past the last position written.
    pub output: O,
}

impl<I1, I2, O> In1In2OutResult<I1, I2, O> {
    /// Creates a new result record.
    #[inline(always)]
    pub fn new(input1: I1, input2: I2, output: O) -> Self {
        Self {
            input1,
            input2,
            output,
        }
    }
}

impl<I1, I2, O> From<In1In2OutResult<I1, I2, O>> for (I1, I2, O) {
    #[inline(always)]
    fn from(r: In1In2OutResult<I1, I2, O>) -> Self {
        (r.input1, r.input2, r.output)
    }
}

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

//! # Temporary Vector
//!
//! A bump-pointer view that constructs values into a `TemporaryBuffer`.
//!
//! ## Highlights
//!
//! - Borrows its buffer mutably for its whole lifetime, so it cannot outlive
//!   the storage and the storage cannot be handed to a second view.
//! - Never reallocates: the capacity is the buffer's `size()`, and elements
//!   never move once constructed.
//! - Every pushed element is dropped exactly once, either by `clear` or when
//!   the vector itself is dropped.
//! - Pushing onto a full vector panics; `try_push` hands the value back
//!   instead, and `push_unchecked` skips the check entirely.
//!
//! ## Usage
//!
//! ```rust
//! use ranger_algo::memory::buffer::TemporaryBuffer;
//! use ranger_algo::memory::vector::TemporaryVector;
//!
//! let mut buffer: TemporaryBuffer<String> = TemporaryBuffer::allocate(4);
//! let mut scratch = TemporaryVector::new(&mut buffer);
//! scratch.push("left".to_string());
//! scratch.push("right".to_string());
//! assert_eq!(scratch.len(), 2);
//! assert_eq!(scratch[1], "right");
//!
//! scratch.clear();
//! assert!(scratch.is_empty());
//! assert_eq!(scratch.capacity(), 4);
//! ```

use crate::memory::buffer::TemporaryBuffer;
use ranger_core::access::members::{DataMember, EmptyMember, Members, SizeMember};
use ranger_core::cursor::slice::SliceCursor;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

/// Returned by `TemporaryVector::try_push` when the vector is full.
///
/// Carries the rejected value so the caller keeps ownership of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("temporary vector is full (capacity {capacity})")]
pub struct CapacityError<T> {
    value: T,
    capacity: usize,
}

impl<T> CapacityError<T> {
    /// Returns the capacity of the vector that rejected the value.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recovers the rejected value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// A fixed-capacity vector constructed in place inside a `TemporaryBuffer`.
pub struct TemporaryVector<'b, T> {
    begin: NonNull<T>,
    len: usize,
    capacity: usize,
    _buffer: PhantomData<&'b mut TemporaryBuffer<T>>,
}

impl<'b, T> TemporaryVector<'b, T> {
    /// Creates an empty vector over `buffer`, with capacity `buffer.size()`.
    #[inline]
    pub fn new(buffer: &'b mut TemporaryBuffer<T>) -> Self {
        let begin = NonNull::new(buffer.data()).unwrap_or(NonNull::dangling());
        Self {
            begin,
            len: 0,
            capacity: buffer.size(),
            _buffer: PhantomData,
        }
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements the vector can hold.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if there are no live elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no further element fits.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Appends `value`.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(
            self.len < self.capacity,
            "called `TemporaryVector::push` on a full vector: the capacity is {}",
            self.capacity
        );
        // SAFETY: the capacity was checked above.
        unsafe { self.push_unchecked(value) }
    }

    /// Appends `value`, or returns it inside a `CapacityError` if the vector
    /// is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger_algo::memory::buffer::TemporaryBuffer;
    /// use ranger_algo::memory::vector::TemporaryVector;
    ///
    /// let mut buffer: TemporaryBuffer<u8> = TemporaryBuffer::allocate(1);
    /// let mut scratch = TemporaryVector::new(&mut buffer);
    /// assert!(scratch.try_push(1).is_ok());
    /// let err = scratch.try_push(2).unwrap_err();
    /// assert_eq!(err.into_inner(), 2);
    /// ```
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError {
                value,
                capacity: self.capacity,
            });
        }
        // SAFETY: the vector is not full.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Appends `value` without checking the capacity.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `self.len() < self.capacity()`.
    #[inline(always)]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(
            self.len < self.capacity,
            "called `TemporaryVector::push_unchecked` on a full vector: the capacity is {}",
            self.capacity
        );
        // SAFETY: the slot at `len` lies inside the buffer and is uninitialized.
        unsafe { ptr::write(self.begin.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Constructs an element in the next slot from `make` and returns a
    /// reference to it.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full. If `make` panics, nothing is added.
    #[inline]
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        assert!(
            self.len < self.capacity,
            "called `TemporaryVector::emplace_with` on a full vector: the capacity is {}",
            self.capacity
        );
        // SAFETY: the slot at `len` lies inside the buffer and is uninitialized.
        let slot = unsafe { self.begin.as_ptr().add(self.len) };
        // SAFETY: see above; the slot becomes live only after the write.
        unsafe { ptr::write(slot, make()) };
        self.len += 1;
        // SAFETY: the slot was just initialized and is exclusively borrowed through `self`.
        unsafe { &mut *slot }
    }

    /// Drops every live element. The capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.begin.as_ptr(), self.len);
        // Reset first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        // SAFETY: `live` covers exactly the initialized prefix of the buffer.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Returns the live elements as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized and `begin` is aligned and non-null.
        unsafe { std::slice::from_raw_parts(self.begin.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `self` is borrowed exclusively.
        unsafe { std::slice::from_raw_parts_mut(self.begin.as_ptr(), self.len) }
    }

    /// Returns an iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> Drop for TemporaryVector<'_, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Index<usize> for TemporaryVector<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "called `TemporaryVector::index` with index out of bounds: the len is {} but the index is {}",
            self.len,
            index
        );
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for TemporaryVector<'_, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "called `TemporaryVector::index_mut` with index out of bounds: the len is {} but the index is {}",
            self.len,
            index
        );
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a TemporaryVector<'_, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.iter()
    }
}

impl<T> std::fmt::Debug for TemporaryVector<'_, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemporaryVector")
            .field("elements", &self.as_slice())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<'a, 'b, T> Members for &'a TemporaryVector<'b, T> {
    type Cursor = SliceCursor<'a, T>;
    type End = SliceCursor<'a, T>;

    #[inline(always)]
    fn begin(&self) -> SliceCursor<'a, T> {
        let this: &'a TemporaryVector<'b, T> = *self;
        SliceCursor::new(this.as_slice())
    }

    #[inline(always)]
    fn end(&self) -> SliceCursor<'a, T> {
        let this: &'a TemporaryVector<'b, T> = *self;
        SliceCursor::at_end(this.as_slice())
    }
}

impl<T> SizeMember for &TemporaryVector<'_, T> {
    #[inline(always)]
    fn size(&self) -> usize {
        self.len
    }
}

impl<T> EmptyMember for &TemporaryVector<'_, T> {
    type Output = bool;

    #[inline(always)]
    fn empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> DataMember for &TemporaryVector<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn data(&self) -> *const T {
        self.begin.as_ptr()
    }
}

ranger_core::range_access!(
    impl['a, 'b, T] &'a TemporaryVector<'b, T> => SliceCursor<'a, T>, SliceCursor<'a, T>
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::set_union::set_union;
    use ranger_core::cursor::output::back_inserter;
    use ranger_core::cursor::InputCursor;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many times values of this type are dropped.
    struct DropCounter {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn test_push_then_clear_drops_each_element_once() {
        let drops = Rc::new(Cell::new(0));
        let mut buffer: TemporaryBuffer<DropCounter> = TemporaryBuffer::allocate(8);
        let mut scratch = TemporaryVector::new(&mut buffer);

        for _ in 0..5 {
            scratch.push(DropCounter {
                drops: Rc::clone(&drops),
            });
        }
        assert_eq!(drops.get(), 0);

        scratch.clear();
        assert_eq!(scratch.len(), 0);
        assert_eq!(scratch.capacity(), 8);
        assert_eq!(drops.get(), 5);

        drop(scratch);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_drop_destroys_remaining_elements() {
        let drops = Rc::new(Cell::new(0));
        let mut buffer: TemporaryBuffer<DropCounter> = TemporaryBuffer::allocate(3);
        {
            let mut scratch = TemporaryVector::new(&mut buffer);
            scratch.push(DropCounter {
                drops: Rc::clone(&drops),
            });
            scratch.emplace_with(|| DropCounter {
                drops: Rc::clone(&drops),
            });
        }
        assert_eq!(drops.get(), 2);

        // The buffer can host a fresh view once the first is gone.
        let scratch = TemporaryVector::new(&mut buffer);
        assert!(scratch.is_empty());
        assert_eq!(scratch.capacity(), 3);
    }

    #[test]
    #[should_panic(expected = "called `TemporaryVector::push` on a full vector")]
    fn test_push_on_full_vector_panics() {
        let mut buffer: TemporaryBuffer<u8> = TemporaryBuffer::allocate(1);
        let mut scratch = TemporaryVector::new(&mut buffer);
        scratch.push(1);
        scratch.push(2);
    }

    #[test]
    fn test_try_push_returns_rejected_value() {
        let mut buffer: TemporaryBuffer<String> = TemporaryBuffer::allocate(1);
        let mut scratch = TemporaryVector::new(&mut buffer);

        assert!(scratch.try_push("kept".to_string()).is_ok());
        let err = scratch.try_push("rejected".to_string()).unwrap_err();

        assert_eq!(err.capacity(), 1);
        assert_eq!(err.to_string(), "temporary vector is full (capacity 1)");
        assert_eq!(err.into_inner(), "rejected");
        assert_eq!(scratch.as_slice(), ["kept".to_string()]);
    }

    #[test]
    fn test_zero_capacity_vector() {
        let mut buffer: TemporaryBuffer<u32> = TemporaryBuffer::empty();
        let mut scratch = TemporaryVector::new(&mut buffer);

        assert!(scratch.is_full());
        assert!(scratch.try_push(7).is_err());
        assert!(scratch.as_slice().is_empty());
    }

    #[test]
    fn test_emplace_with_and_index_mut() {
        let mut buffer: TemporaryBuffer<Vec<u8>> = TemporaryBuffer::allocate(2);
        let mut scratch = TemporaryVector::new(&mut buffer);

        scratch.emplace_with(Vec::new).push(1);
        scratch.push(vec![2, 3]);
        scratch[0].push(4);
        scratch.as_mut_slice()[1].clear();

        assert_eq!(scratch[0], vec![1, 4]);
        assert!(scratch[1].is_empty());
        assert_eq!(scratch.iter().map(Vec::len).sum::<usize>(), 2);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut buffer: TemporaryBuffer<()> = TemporaryBuffer::allocate(3);
        let mut scratch = TemporaryVector::new(&mut buffer);
        scratch.push(());
        scratch.push(());
        assert_eq!(scratch.len(), 2);
        assert_eq!(scratch.iter().count(), 2);
    }

    #[test]
    fn test_range_access_over_live_elements() {
        let mut buffer: TemporaryBuffer<i32> = TemporaryBuffer::allocate(4);
        let mut scratch = TemporaryVector::new(&mut buffer);
        scratch.push(1);
        scratch.push(4);

        assert_eq!(ranger_core::size!(&scratch), 2);
        assert!(!ranger_core::empty!(&scratch));
        assert_eq!(ranger_core::data!(&scratch), scratch.as_slice().as_ptr());
        assert_eq!(*ranger_core::begin!(&scratch).read(), 1);
        assert_eq!(ranger_core::end!(&scratch).position(), 2);
        assert_eq!(*ranger_core::rbegin!(&scratch).read(), 4);

        let other = [2, 3];
        let mut merged: Vec<i32> = Vec::new();
        set_union(&scratch, &other, back_inserter(&mut merged));
        assert_eq!(merged, vec![1, 2, 3, 4]);
    }
}

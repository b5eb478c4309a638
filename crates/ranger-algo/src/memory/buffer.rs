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

//! Owned scratch storage for algorithms that need auxiliary space.
//!
//! A `TemporaryBuffer<T>` is raw, uninitialized room for up to `size()`
//! values of `T`. It never constructs or drops elements itself; that is the
//! job of the `TemporaryVector` viewing it. Allocation failure is not an
//! error: the buffer simply reports fewer slots (possibly none), and callers
//! are expected to fall back to a slower strategy that needs less memory.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// The alignment the global allocator is assumed to give any allocation
/// without being asked for more.
pub const DEFAULT_ALIGNMENT: usize = 2 * mem::size_of::<usize>();

/// Computes where the first `align`-aligned slot of `size` bytes starts
/// inside `[addr, addr + bytes)`, and how many such slots fit from there.
///
/// Returns `(offset, count)`; `count` is zero when not even one slot fits.
#[inline]
pub fn aligned_region(addr: usize, bytes: usize, align: usize, size: usize) -> (usize, usize) {
    debug_assert!(
        align.is_power_of_two(),
        "called `aligned_region` with an alignment that is not a power of two: {}",
        align
    );

    if size == 0 || bytes < size {
        return (0, 0);
    }

    let offset = addr.wrapping_neg() & (align - 1);
    if offset > bytes - size {
        return (0, 0);
    }

    (offset, (bytes - offset) / size)
}

/// Uninitialized, suitably aligned storage for up to `size()` values of `T`.
pub struct TemporaryBuffer<T> {
    /// The allocation to release on drop, if any.
    allocation: Option<(NonNull<u8>, Layout)>,
    data: NonNull<T>,
    size: usize,
    _marker: PhantomData<T>,
}

impl<T> TemporaryBuffer<T> {
    /// Creates a buffer with no storage.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            allocation: None,
            data: NonNull::dangling(),
            size: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for up to `n` values of `T`.
    ///
    /// The result may hold fewer than `n` slots: if `n * size_of::<T>()`
    /// overflows or the allocator fails, it holds none; if `T` is aligned
    /// beyond `DEFAULT_ALIGNMENT`, the aligned part of a default-aligned
    /// allocation is used and may be shorter. Check `size()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ranger_algo::memory::buffer::TemporaryBuffer;
    ///
    /// let buffer: TemporaryBuffer<u64> = TemporaryBuffer::allocate(16);
    /// assert_eq!(buffer.size(), 16);
    /// assert_eq!(buffer.data() as usize % std::mem::align_of::<u64>(), 0);
    /// ```
    pub fn allocate(n: usize) -> Self {
        if n == 0 {
            return Self::empty();
        }

        if mem::size_of::<T>() == 0 {
            return Self {
                allocation: None,
                data: NonNull::dangling(),
                size: n,
                _marker: PhantomData,
            };
        }

        if mem::align_of::<T>() <= DEFAULT_ALIGNMENT {
            Self::allocate_array(n)
        } else {
            Self::allocate_over_aligned(n)
        }
    }

    fn allocate_array(n: usize) -> Self {
        let layout = match Layout::array::<T>(n) {
            Ok(layout) => layout,
            Err(_) => {
                log::debug!(
                    "temporary buffer of {} x {} bytes overflows; returning an empty buffer",
                    n,
                    mem::size_of::<T>()
                );
                return Self::empty();
            }
        };

        // SAFETY: `layout` has a non-zero size since `n > 0` and `T` is not zero-sized.
        let raw = unsafe { alloc::alloc(layout) };
        let Some(raw) = NonNull::new(raw) else {
            log::debug!(
                "allocator refused {} bytes for a temporary buffer; returning an empty buffer",
                layout.size()
            );
            return Self::empty();
        };

        log::trace!(
            "allocated temporary buffer of {} elements ({} bytes)",
            n,
            layout.size()
        );

        Self {
            allocation: Some((raw, layout)),
            data: raw.cast(),
            size: n,
            _marker: PhantomData,
        }
    }

    fn allocate_over_aligned(n: usize) -> Self {
        let elem_size = mem::size_of::<T>();
        let align = mem::align_of::<T>();

        let Some(layout) = n
            .checked_mul(elem_size)
            .and_then(|bytes| Layout::from_size_align(bytes, DEFAULT_ALIGNMENT).ok())
        else {
            log::debug!(
                "over-aligned temporary buffer of {} x {} bytes overflows; returning an empty buffer",
                n,
                elem_size
            );
            return Self::empty();
        };

        // SAFETY: `layout` has a non-zero size since `n > 0` and `T` is not zero-sized.
        let raw = unsafe { alloc::alloc(layout) };
        let Some(raw) = NonNull::new(raw) else {
            log::debug!(
                "allocator refused {} bytes for a temporary buffer; returning an empty buffer",
                layout.size()
            );
            return Self::empty();
        };

        let (offset, count) = aligned_region(raw.as_ptr() as usize, layout.size(), align, elem_size);
        if count == 0 {
            log::debug!(
                "no {}-aligned slot fits in {} bytes at {:p}; returning an empty buffer",
                align,
                layout.size(),
                raw
            );
            // SAFETY: `raw` was allocated above with exactly `layout`.
            unsafe { alloc::dealloc(raw.as_ptr(), layout) };
            return Self::empty();
        }
        if count < n {
            log::debug!(
                "over-aligned temporary buffer shrank from {} to {} elements (alignment {})",
                n,
                count,
                align
            );
        }

        // SAFETY: `offset + count * elem_size <= layout.size()`, so the carved
        // region lies inside the allocation, and `offset` makes it `align`-aligned.
        let data = unsafe { NonNull::new_unchecked(raw.as_ptr().add(offset)) }.cast::<T>();

        Self {
            allocation: Some((raw, layout)),
            data,
            size: count,
            _marker: PhantomData,
        }
    }

    /// Returns a pointer to the first slot.
    ///
    /// The pointer is dangling (but aligned) when the buffer has no storage.
    #[inline(always)]
    pub fn data(&self) -> *mut T {
        self.data.as_ptr()
    }

    /// Returns the number of slots.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the buffer has no slots.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<T> Default for TemporaryBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for TemporaryBuffer<T> {
    fn drop(&mut self) {
        if let Some((raw, layout)) = self.allocation.take() {
            // SAFETY: `raw` was returned by `alloc::alloc(layout)` and is released once.
            unsafe { alloc::dealloc(raw.as_ptr(), layout) };
        }
    }
}

impl<T> std::fmt::Debug for TemporaryBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemporaryBuffer")
            .field("data", &self.data)
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(align(64))]
    #[allow(dead_code)]
    struct Line([u8; 64]);

    #[test]
    fn test_aligned_region_exact_fit() {
        assert_eq!(aligned_region(64, 256, 64, 64), (0, 4));
    }

    #[test]
    fn test_aligned_region_shrinks_after_padding() {
        assert_eq!(aligned_region(16, 256, 64, 64), (48, 3));
    }

    #[test]
    fn test_aligned_region_degrades_to_zero() {
        // One 64-byte slot at address 8 would need 56 bytes of padding first.
        assert_eq!(aligned_region(8, 64, 64, 64), (0, 0));
        assert_eq!(aligned_region(0, 32, 64, 64), (0, 0));
        assert_eq!(aligned_region(0, 64, 8, 0), (0, 0));
    }

    #[test]
    fn test_allocate_regular_alignment() {
        let buffer: TemporaryBuffer<u32> = TemporaryBuffer::allocate(10);
        assert_eq!(buffer.size(), 10);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.data() as usize % mem::align_of::<u32>(), 0);
    }

    #[test]
    fn test_allocate_zero_is_empty() {
        let buffer: TemporaryBuffer<String> = TemporaryBuffer::allocate(0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_allocate_overflow_is_empty() {
        let buffer: TemporaryBuffer<u64> = TemporaryBuffer::allocate(usize::MAX);
        assert_eq!(buffer.size(), 0);
    }

    #[test]
    fn test_allocate_zero_sized_type() {
        let buffer: TemporaryBuffer<()> = TemporaryBuffer::allocate(1000);
        assert_eq!(buffer.size(), 1000);
    }

    #[test]
    fn test_allocate_over_aligned_never_exceeds_request() {
        for n in [1usize, 2, 3, 8, 33] {
            let buffer: TemporaryBuffer<Line> = TemporaryBuffer::allocate(n);
            assert!(buffer.size() <= n);
            if !buffer.is_empty() {
                assert_eq!(buffer.data() as usize % 64, 0);
            }
        }
    }

    #[test]
    fn test_allocate_over_aligned_overflow_is_empty() {
        let buffer: TemporaryBuffer<Line> = TemporaryBuffer::allocate(usize::MAX / 2);
        assert!(buffer.is_empty());
    }
}

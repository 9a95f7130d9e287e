// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;

use crate::error::BufferError;

/// A contiguous, fully initialized heap block with a single owner.
///
/// The capacity is fixed at construction. A capacity of zero never touches
/// the allocator. The block is released when the buffer is dropped.
///
/// # Example
///
/// ```rust
/// use simplevec_buffer::ArrayBuffer;
///
/// let mut a = ArrayBuffer::<u8>::try_new(3).unwrap();
/// let mut b = ArrayBuffer::<u8>::new();
///
/// a.swap(&mut b);
///
/// assert_eq!(a.capacity(), 0);
/// assert_eq!(b.as_slice(), &[0, 0, 0]);
/// ```
pub struct ArrayBuffer<T> {
    inner: Box<[T]>,
}

impl<T> ArrayBuffer<T> {
    /// Creates an empty buffer without allocating.
    pub fn new() -> Self {
        Self {
            inner: Vec::new().into_boxed_slice(),
        }
    }

    /// Allocates a block of `capacity` default-valued elements.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `capacity` elements of `T` exceed `isize::MAX` bytes.
    /// - [`BufferError::AllocationFailed`] if the allocator cannot provide the block.
    pub fn try_new(capacity: usize) -> Result<Self, BufferError>
    where
        T: Default,
    {
        Self::try_from_fn(capacity, |_| T::default())
    }

    /// Allocates a block of `capacity` elements, initializing slot `i` with `f(i)`.
    ///
    /// The allocation happens before `f` is called for the first time, so a
    /// failure never runs the initializer.
    ///
    /// # Errors
    ///
    /// Same as [`ArrayBuffer::try_new`].
    pub fn try_from_fn<F>(capacity: usize, mut f: F) -> Result<Self, BufferError>
    where
        F: FnMut(usize) -> T,
    {
        if capacity == 0 {
            return Ok(Self::new());
        }

        Layout::array::<T>(capacity).map_err(|_| BufferError::CapacityOverflow)?;

        let mut block = Vec::new();
        if block.try_reserve_exact(capacity).is_err() {
            log::debug!("allocation of {} elements failed", capacity);
            return Err(BufferError::AllocationFailed { capacity });
        }

        for index in 0..capacity {
            block.push(f(index));
        }

        debug_assert_eq!(block.len(), capacity);

        Ok(Self {
            inner: block.into_boxed_slice(),
        })
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the block has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the whole block as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns the whole block as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Returns a pointer to the start of the block.
    ///
    /// The pointer is dangling (but non-null and aligned) when the capacity is zero.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.inner.as_ptr()
    }

    /// Returns a mutable pointer to the start of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.inner.as_mut_ptr()
    }

    /// Exchanges blocks with `other`. Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Moves the block out, leaving an empty buffer in its place.
    #[inline]
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap(&mut taken);
        taken
    }

    /// Consumes the buffer and returns the block as a `Vec` with `len == capacity`.
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }
}

impl<T> Default for ArrayBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for ArrayBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(any(test, feature = "test_utils"))]
use core::cell::Cell;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use simplevec_buffer::{ArrayBuffer, BufferError};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::SimpleVectorBehaviour;
use crate::error::SimpleVectorError;
use crate::reserve::ReserveProxy;

/// Factor applied to the capacity when a full vector needs one more slot.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity a vector grows to from zero.
pub const MIN_NON_ZERO_CAPACITY: usize = 1;

/// A growable array with value semantics.
///
/// `SimpleVector<T>` owns one [`ArrayBuffer<T>`] and tracks how many of its
/// slots hold live values. Slots in `[len, capacity)` stay initialized but are
/// logically dead: shrinking operations only move the length, never release
/// storage.
///
/// Every operation that may need a new block returns a `Result`. On
/// [`SimpleVectorError::Alloc`] the vector is left exactly as it was.
///
/// Borrowed traversal handles (`iter()`, slices, element references) cannot be
/// held across a call that grows or shifts the vector; the borrow checker
/// rejects it.
///
/// # Example
///
/// ```rust
/// use simplevec::{SimpleVector, SimpleVectorError};
///
/// fn example() -> Result<(), SimpleVectorError> {
///     let mut vec = SimpleVector::from_slice(&[1, 2, 3])?;
///
///     vec.insert(1, 9)?;
///     assert_eq!(vec, [1, 9, 2, 3]);
///
///     vec.erase(0);
///     assert_eq!(vec, [9, 2, 3]);
///
///     assert!(vec.at(3).is_err());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct SimpleVector<T> {
    items: ArrayBuffer<T>,
    size: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: SimpleVectorBehaviour,
    #[cfg(any(test, feature = "test_utils"))]
    allocation_count: Cell<usize>,
}

impl<T> SimpleVector<T> {
    fn from_parts(items: ArrayBuffer<T>, size: usize) -> Self {
        debug_assert!(size <= items.capacity());

        Self {
            items,
            size,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: SimpleVectorBehaviour::default(),
            #[cfg(any(test, feature = "test_utils"))]
            allocation_count: Cell::new(0),
        }
    }

    /// Reallocations and copies allocate through here so injected failures apply.
    fn allocate_with<F>(&self, capacity: usize, f: F) -> Result<ArrayBuffer<T>, SimpleVectorError>
    where
        F: FnMut(usize) -> T,
    {
        #[cfg(any(test, feature = "test_utils"))]
        if capacity > 0 {
            let nth = self.allocation_count.get() + 1;
            self.allocation_count.set(nth);

            if self.behaviour.fails_at(nth) {
                return Err(BufferError::AllocationFailed { capacity }.into());
            }
        }

        Ok(ArrayBuffer::try_from_fn(capacity, f)?)
    }

    /// Capacity after one doubling step: 0 → 1 → 2 → 4 → ...
    fn grown_capacity(&self) -> Result<usize, SimpleVectorError> {
        let doubled = self
            .capacity()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(BufferError::CapacityOverflow)?;

        Ok(doubled.max(MIN_NON_ZERO_CAPACITY))
    }

    /// Moves the live elements into a new block of exactly `new_capacity` slots.
    ///
    /// Nothing is touched until the new block exists.
    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), SimpleVectorError>
    where
        T: Default,
    {
        debug_assert!(new_capacity >= self.size);

        let mut items = self.allocate_with(new_capacity, |_| T::default())?;

        log::trace!(
            "reallocating SimpleVector: capacity {} -> {} ({} live elements)",
            self.capacity(),
            new_capacity,
            self.size
        );

        let size = self.size;
        items.as_mut_slice()[..size].swap_with_slice(&mut self.items.as_mut_slice()[..size]);
        self.items.swap(&mut items);

        Ok(())
    }

    /// Builds a deep copy of `source` using this vector's allocation path.
    fn copy_of(&self, source: &Self) -> Result<Self, SimpleVectorError>
    where
        T: Clone,
    {
        let live = source.as_slice();
        let items = self.allocate_with(live.len(), |index| live[index].clone())?;

        Ok(Self::from_parts(items, live.len()))
    }

    /// Creates an empty vector without allocating.
    pub fn new() -> Self {
        Self::from_parts(ArrayBuffer::new(), 0)
    }

    /// Creates a vector of `size` default-valued elements with capacity `size`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if the block cannot be allocated.
    pub fn with_size(size: usize) -> Result<Self, SimpleVectorError>
    where
        T: Default,
    {
        let items = ArrayBuffer::try_new(size)?;

        Ok(Self::from_parts(items, size))
    }

    /// Creates a vector of `size` copies of `value` with capacity `size`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if the block cannot be allocated.
    pub fn from_elem(size: usize, value: &T) -> Result<Self, SimpleVectorError>
    where
        T: Clone,
    {
        let items = ArrayBuffer::try_from_fn(size, |_| value.clone())?;

        Ok(Self::from_parts(items, size))
    }

    /// Creates a vector holding a copy of every element of `values`, in order.
    ///
    /// Size and capacity both equal `values.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if the block cannot be allocated.
    pub fn from_slice(values: &[T]) -> Result<Self, SimpleVectorError>
    where
        T: Clone,
    {
        let items = ArrayBuffer::try_from_fn(values.len(), |index| values[index].clone())?;

        Ok(Self::from_parts(items, values.len()))
    }

    /// Creates an empty vector whose capacity is taken from a [`ReserveProxy`].
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if the block cannot be allocated.
    pub fn from_reserve(proxy: ReserveProxy) -> Result<Self, SimpleVectorError>
    where
        T: Default,
    {
        let items = ArrayBuffer::try_new(proxy.capacity())?;

        Ok(Self::from_parts(items, 0))
    }

    /// Returns a deep copy with independent storage.
    ///
    /// The copy's capacity equals this vector's length.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if the block cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, SimpleVectorError>
    where
        T: Clone,
    {
        self.copy_of(self)
    }

    /// Replaces the contents with a deep copy of `source`.
    ///
    /// The copy is built first and swapped in afterwards, so on failure this
    /// vector is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if the block cannot be allocated.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), SimpleVectorError>
    where
        T: Clone,
    {
        let mut copy = self.copy_of(source)?;
        self.swap(&mut copy);

        Ok(())
    }

    /// Moves the contents out, leaving this vector with size and capacity 0.
    pub fn take(&mut self) -> Self {
        let size = core::mem::replace(&mut self.size, 0);

        Self::from_parts(self.items.take(), size)
    }

    /// Replaces the contents with those of `source`, leaving `source` empty.
    ///
    /// The previous block of this vector is released.
    pub fn assign_take(&mut self, source: &mut Self) {
        let mut moved = source.take();
        self.swap(&mut moved);
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns `true` if the vector holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, SimpleVectorError> {
        self.as_slice().get(index).ok_or(SimpleVectorError::OutOfRange {
            index,
            size: self.size,
        })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVectorError> {
        let size = self.size;

        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SimpleVectorError::OutOfRange { index, size })
    }

    /// Returns the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Returns the live elements mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;

        &mut self.items.as_mut_slice()[..size]
    }

    /// Iterates over the live elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Sets the length to zero. Capacity and storage are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Appends `value`.
    ///
    /// A full vector doubles its capacity first (an empty one grows to 1).
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if growth fails; `value` is dropped
    /// and the vector is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), SimpleVectorError>
    where
        T: Default,
    {
        if self.size == self.capacity() {
            self.reallocate(self.grown_capacity()?)?;
        }

        let size = self.size;
        self.items.as_mut_slice()[size] = value;
        self.size += 1;

        Ok(())
    }

    /// Inserts `value` at `pos`, shifting `[pos, len)` one slot to the right.
    ///
    /// Grows like [`push_back`](Self::push_back). Returns `pos`, the position
    /// of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if growth fails; the vector is unchanged.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, SimpleVectorError>
    where
        T: Default,
    {
        assert!(
            pos <= self.size,
            "insert position {} out of bounds (size {})",
            pos,
            self.size
        );

        if self.size == self.capacity() {
            self.reallocate(self.grown_capacity()?)?;
        }

        let size = self.size;
        let slots = self.items.as_mut_slice();
        slots[size] = value;
        slots[pos..=size].rotate_right(1);
        self.size += 1;

        Ok(pos)
    }

    /// Drops the last element from the live range.
    ///
    /// Calling this on an empty vector is a logic error: it trips a debug
    /// assertion and is a no-op otherwise.
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back on empty SimpleVector");

        if !self.is_empty() {
            self.size -= 1;
        }
    }

    /// Removes the element at `pos`, shifting `[pos + 1, len)` one slot to the left.
    ///
    /// Returns `pos`, which now holds the element that followed the removed one
    /// (or equals the new `len()` if the last element was removed).
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    pub fn erase(&mut self, pos: usize) -> usize {
        assert!(
            pos < self.size,
            "erase position {} out of bounds (size {})",
            pos,
            self.size
        );

        let size = self.size;
        self.items.as_mut_slice()[pos..size].rotate_left(1);
        self.size -= 1;

        pos
    }

    /// Sets the length to `new_size`.
    ///
    /// - Shrinking only moves the length; storage is kept.
    /// - Growing within capacity resets `[len, new_size)` to `T::default()`.
    /// - Growing past capacity reallocates to `max(new_size, 2 * capacity)` first.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if growth fails; the vector is unchanged.
    pub fn resize(&mut self, new_size: usize) -> Result<(), SimpleVectorError>
    where
        T: Default,
    {
        if new_size <= self.size {
            self.size = new_size;
            return Ok(());
        }

        if new_size > self.capacity() {
            let doubled = self
                .capacity()
                .checked_mul(GROWTH_FACTOR)
                .ok_or(BufferError::CapacityOverflow)?;

            self.reallocate(new_size.max(doubled))?;
        }

        let size = self.size;
        self.items.as_mut_slice()[size..new_size]
            .iter_mut()
            .for_each(|slot| *slot = T::default());
        self.size = new_size;

        Ok(())
    }

    /// Ensures room for `new_capacity` elements.
    ///
    /// Reallocates to exactly `new_capacity` when it exceeds the current
    /// capacity; otherwise does nothing. Length and contents are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if the block cannot be allocated;
    /// the vector is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), SimpleVectorError>
    where
        T: Default,
    {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity)?;
        }

        Ok(())
    }

    /// Appends a copy of every element of `values`.
    ///
    /// Grows at most once, to `max(len + values.len(), 2 * capacity)`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::Alloc`] if growth fails; the vector is unchanged.
    pub fn try_extend_from_slice(&mut self, values: &[T]) -> Result<(), SimpleVectorError>
    where
        T: Clone + Default,
    {
        let required = self
            .size
            .checked_add(values.len())
            .ok_or(BufferError::CapacityOverflow)?;

        if required > self.capacity() {
            self.reallocate(required.max(self.grown_capacity()?))?;
        }

        let size = self.size;
        self.items.as_mut_slice()[size..required].clone_from_slice(values);
        self.size = required;

        Ok(())
    }

    /// Exchanges length, capacity and storage with `other`. Never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.size, &mut other.size);
        self.items.swap(&mut other.items);
    }

    /// Changes the failure-injection behaviour and restarts the allocation count.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: SimpleVectorBehaviour) {
        self.behaviour = behaviour;
        self.allocation_count.set(0);
    }

    pub(crate) fn into_parts(self) -> (ArrayBuffer<T>, usize) {
        (self.items, self.size)
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// # Panics
    ///
    /// Panics if the copy cannot be allocated. Use
    /// [`try_clone`](SimpleVector::try_clone) to handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(e) => panic!("failed to clone SimpleVector: {}", e),
        }
    }

    /// # Panics
    ///
    /// Panics if the copy cannot be allocated. Use
    /// [`assign_from`](SimpleVector::assign_from) to handle that case.
    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign_from(source) {
            panic!("failed to clone SimpleVector: {}", e);
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimpleVector")
            .field("items", &self.as_slice())
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    /// Unchecked against the length: only debug builds assert `index < len()`.
    /// In release builds an index in `[len, capacity)` reads a stale slot: a
    /// removed value or a default. Past the capacity this still panics.
    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size,
            "index {} out of range for size {}",
            index,
            self.size
        );

        &self.items.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size,
            "index {} out of range for size {}",
            index,
            self.size
        );

        &mut self.items.as_mut_slice()[index]
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: core::hash::Hash> core::hash::Hash for SimpleVector<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    /// # Panics
    ///
    /// Panics if growth fails.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(e) = self.push_back(value) {
                panic!("failed to extend SimpleVector: {}", e);
            }
        }
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    /// # Panics
    ///
    /// Panics if growth fails.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Clone> TryFrom<&[T]> for SimpleVector<T> {
    type Error = SimpleVectorError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<T: Clone, const N: usize> TryFrom<[T; N]> for SimpleVector<T> {
    type Error = SimpleVectorError;

    fn try_from(values: [T; N]) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl<T: Default> TryFrom<ReserveProxy> for SimpleVector<T> {
    type Error = SimpleVectorError;

    fn try_from(proxy: ReserveProxy) -> Result<Self, Self::Error> {
        Self::from_reserve(proxy)
    }
}

impl<T> From<SimpleVector<T>> for alloc::vec::Vec<T> {
    /// Keeps the live elements only; the returned `Vec` may have spare capacity.
    fn from(vec: SimpleVector<T>) -> Self {
        let (items, size) = vec.into_parts();
        let mut vec = items.into_vec();
        vec.truncate(size);
        vec
    }
}

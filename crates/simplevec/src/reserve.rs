// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Capacity request for a freshly constructed [`SimpleVector`](crate::SimpleVector).
///
/// Carries nothing but the desired capacity. It is neither `Clone` nor `Copy`:
/// [`SimpleVector::from_reserve`](crate::SimpleVector::from_reserve) takes it
/// by value, so each proxy preallocates exactly one vector.
///
/// # Example
///
/// ```rust
/// use simplevec::{SimpleVector, reserve};
///
/// let vec = SimpleVector::<u32>::from_reserve(reserve(10)).unwrap();
///
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 10);
/// ```
#[derive(Debug, Default, Eq, PartialEq)]
pub struct ReserveProxy {
    capacity_to_reserve: usize,
}

impl ReserveProxy {
    /// Creates a proxy requesting `capacity_to_reserve` slots.
    #[inline]
    pub const fn new(capacity_to_reserve: usize) -> Self {
        Self {
            capacity_to_reserve,
        }
    }

    /// Returns the requested capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity_to_reserve
    }
}

/// Shorthand for [`ReserveProxy::new`].
#[inline]
pub const fn reserve(capacity_to_reserve: usize) -> ReserveProxy {
    ReserveProxy::new(capacity_to_reserve)
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting allocation failures into a `SimpleVector`.
///
/// This is only available with the `test_utils` feature and allows users
/// to exercise the allocation-failure paths of their own code.
///
/// The behaviour is sticky: once set, it remains active until changed.
/// Only allocations of at least one slot are counted.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use simplevec::{SimpleVector, SimpleVectorBehaviour, SimpleVectorError};
///
/// let mut vec = SimpleVector::<u8>::new();
/// vec.change_behaviour(SimpleVectorBehaviour::FailAtAllocation);
///
/// assert!(matches!(vec.push_back(1), Err(SimpleVectorError::Alloc(_))));
/// assert_eq!(vec.capacity(), 0);
///
/// vec.change_behaviour(SimpleVectorBehaviour::None);
/// assert!(vec.push_back(1).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleVectorBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every allocation fails.
    FailAtAllocation,
    /// Fail the Nth allocation after the behaviour was set (1-indexed: 1 = next allocation fails).
    FailAtNthAllocation(usize),
}

impl Default for SimpleVectorBehaviour {
    fn default() -> Self {
        Self::None
    }
}

impl SimpleVectorBehaviour {
    /// Returns `true` if the `nth` allocation (1-indexed) must fail.
    pub(crate) fn fails_at(&self, nth: usize) -> bool {
        match self {
            Self::None => false,
            Self::FailAtAllocation => true,
            Self::FailAtNthAllocation(n) => *n == nth,
        }
    }
}

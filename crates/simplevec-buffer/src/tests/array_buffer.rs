// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use crate::{ArrayBuffer, BufferError};

struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

// =============================================================================
// new()
// =============================================================================

#[test]
fn test_new_is_empty() {
    let buffer: ArrayBuffer<u32> = ArrayBuffer::new();

    assert_eq!(buffer.capacity(), 0);
    assert!(buffer.is_empty());
    assert!(buffer.as_slice().is_empty());
    assert!(!buffer.as_ptr().is_null());
}

#[test]
fn test_default_is_empty() {
    let buffer: ArrayBuffer<String> = ArrayBuffer::default();
    assert_eq!(buffer.capacity(), 0);
}

// =============================================================================
// try_new()
// =============================================================================

#[test]
fn test_try_new_default_initializes_every_slot() {
    let buffer = ArrayBuffer::<u64>::try_new(16).expect("Failed to try_new(..)");

    assert_eq!(buffer.capacity(), 16);
    assert!(buffer.as_slice().iter().all(|&value| value == 0));
}

#[test]
fn test_try_new_zero_capacity() {
    let buffer = ArrayBuffer::<String>::try_new(0).expect("Failed to try_new(..)");

    assert!(buffer.is_empty());
}

#[test]
fn test_try_new_capacity_overflow() {
    let result = ArrayBuffer::<u64>::try_new(usize::MAX);

    assert!(matches!(result, Err(BufferError::CapacityOverflow)));
}

#[test]
fn test_try_new_allocation_failure() {
    let capacity = isize::MAX as usize;
    let result = ArrayBuffer::<u8>::try_new(capacity);

    assert_eq!(
        result.map(|buffer| buffer.capacity()),
        Err(BufferError::AllocationFailed { capacity })
    );
}

// =============================================================================
// try_from_fn()
// =============================================================================

#[test]
fn test_try_from_fn_passes_slot_index() {
    let buffer = ArrayBuffer::try_from_fn(5, |index| index * 10).expect("Failed to try_from_fn(..)");

    assert_eq!(buffer.as_slice(), &[0, 10, 20, 30, 40]);
}

#[test]
fn test_try_from_fn_does_not_run_initializer_on_failure() {
    let calls = Cell::new(0usize);

    let result = ArrayBuffer::<u8>::try_from_fn(isize::MAX as usize, |_| {
        calls.set(calls.get() + 1);
        0
    });

    assert!(result.is_err());
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// as_slice(), as_mut_slice(), as_ptr(), as_mut_ptr()
// =============================================================================

#[test]
fn test_as_mut_slice_writes_are_visible() {
    let mut buffer = ArrayBuffer::<u8>::try_new(4).expect("Failed to try_new(..)");

    buffer.as_mut_slice().copy_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);

    assert_eq!(buffer.as_slice(), &[0xAA, 0xBB, 0xCC, 0xDD]);
}

#[test]
fn test_as_ptr_points_at_first_slot() {
    let mut buffer = ArrayBuffer::<u8>::try_new(2).expect("Failed to try_new(..)");
    buffer.as_mut_slice()[0] = 42;

    let slice_ptr = buffer.as_slice().as_ptr();
    assert_eq!(buffer.as_ptr(), slice_ptr);
    assert_eq!(buffer.as_mut_ptr() as *const u8, slice_ptr);
}

// =============================================================================
// swap(), take()
// =============================================================================

#[test]
fn test_swap_exchanges_blocks_without_copying() {
    let mut a = ArrayBuffer::try_from_fn(2, |i| i as u8 + 1).expect("Failed to try_from_fn(..)");
    let mut b = ArrayBuffer::try_from_fn(3, |i| i as u8 + 10).expect("Failed to try_from_fn(..)");

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    a.swap(&mut b);

    assert_eq!(a.as_slice(), &[10, 11, 12]);
    assert_eq!(b.as_slice(), &[1, 2]);
    assert_eq!(a.as_ptr(), b_ptr);
    assert_eq!(b.as_ptr(), a_ptr);
}

#[test]
fn test_take_leaves_empty_buffer() {
    let mut source = ArrayBuffer::try_from_fn(3, |i| i as u32).expect("Failed to try_from_fn(..)");

    let taken = source.take();

    assert!(source.is_empty());
    assert_eq!(taken.as_slice(), &[0, 1, 2]);
}

// =============================================================================
// into_vec()
// =============================================================================

#[test]
fn test_into_vec_keeps_every_slot() {
    let buffer = ArrayBuffer::try_from_fn(3, |i| i as u16).expect("Failed to try_from_fn(..)");
    let vec = buffer.into_vec();

    assert_eq!(vec, vec![0, 1, 2]);
}

// =============================================================================
// Drop
// =============================================================================

#[test]
fn test_drop_releases_every_slot() {
    let drops = Rc::new(Cell::new(0usize));

    {
        let _buffer = ArrayBuffer::try_from_fn(4, |_| DropCounter {
            drops: Rc::clone(&drops),
        })
        .expect("Failed to try_from_fn(..)");
        assert_eq!(drops.get(), 0);
    }

    assert_eq!(drops.get(), 4);
}

#[test]
fn test_swapped_out_block_is_released_by_new_owner() {
    let drops = Rc::new(Cell::new(0usize));

    let mut kept = ArrayBuffer::new();
    {
        let mut replaced = ArrayBuffer::try_from_fn(2, |_| DropCounter {
            drops: Rc::clone(&drops),
        })
        .expect("Failed to try_from_fn(..)");

        kept.swap(&mut replaced);
    }
    assert_eq!(drops.get(), 0);

    drop(kept);
    assert_eq!(drops.get(), 2);
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_shows_capacity_only() {
    let buffer = ArrayBuffer::try_from_fn(3, |i| i as u8).expect("Failed to try_from_fn(..)");

    assert_eq!(format!("{:?}", buffer), "ArrayBuffer { capacity: 3, .. }");
}

proptest! {
    #[test]
    fn prop_try_new_capacity_is_exact(capacity in 0..=512usize) {
        let buffer = ArrayBuffer::<u32>::try_new(capacity).expect("Failed to try_new(..)");

        prop_assert_eq!(buffer.capacity(), capacity);
        prop_assert_eq!(buffer.is_empty(), capacity == 0);
    }
}

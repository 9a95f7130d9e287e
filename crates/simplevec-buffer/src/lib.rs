// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusively owned heap block backing `simplevec`.
//!
//! [`ArrayBuffer<T>`] owns exactly one contiguous block of `T`. The block is
//! fully initialized when it is created and keeps the capacity it was created
//! with until it is dropped. There is no sharing and no reference counting:
//! ownership moves with [`ArrayBuffer::swap`] and [`ArrayBuffer::take`], both
//! constant time and allocation free.
//!
//! Allocation is fallible. Running out of memory, or asking for more elements
//! than the address space can hold, is reported as a [`BufferError`] instead of
//! aborting the process.
//!
//! # Example
//!
//! ```rust
//! use simplevec_buffer::{ArrayBuffer, BufferError};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut current = ArrayBuffer::<u32>::try_new(4)?;
//!     current.as_mut_slice()[0] = 7;
//!
//!     // Build the replacement first, swap only once it exists
//!     let mut replacement = ArrayBuffer::<u32>::try_new(8)?;
//!     replacement.as_mut_slice()[0] = current.as_slice()[0];
//!     current.swap(&mut replacement);
//!
//!     assert_eq!(current.capacity(), 8);
//!     assert_eq!(current.as_slice()[0], 7);
//!     // `replacement` now owns the old block and frees it on drop
//!     assert_eq!(replacement.capacity(), 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod array_buffer;
mod error;

pub use array_buffer::ArrayBuffer;
pub use error::BufferError;

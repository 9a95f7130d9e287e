// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with explicit capacity control and fallible growth.
//!
//! `SimpleVector<T>` is a contiguous, exclusively owned sequence with
//! amortized O(1) append, random access, and explicit reservation.
//!
//! # Core Guarantees
//!
//! - **Predictable growth**: a full vector doubles its capacity (0 → 1 → 2 → 4 → ...).
//!   `reserve(n)` grows to exactly `n`.
//! - **Fallible growth**: every operation that may allocate returns a `Result`.
//!   On failure the vector keeps its previous size, capacity and contents.
//! - **Storage is never shrunk implicitly**: `clear()`, `pop_back()`, `erase()`
//!   and shrinking `resize()` only move the length.
//! - **Deep copies**: `try_clone()` / `assign_from()` build independent storage
//!   and swap it in only once it is complete.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use simplevec::{SimpleVector, SimpleVectorError};
//!
//! fn example() -> Result<(), SimpleVectorError> {
//!     let mut vec = SimpleVector::new();
//!
//!     for i in 0..5u32 {
//!         vec.push_back(i)?;
//!     }
//!
//!     assert_eq!(vec.len(), 5);
//!     assert_eq!(vec.capacity(), 8);
//!     assert_eq!(*vec.at(4)?, 4);
//!     assert!(matches!(vec.at(5), Err(SimpleVectorError::OutOfRange { .. })));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reservation
//!
//! ```rust
//! use simplevec::{SimpleVector, SimpleVectorError, reserve};
//!
//! fn example() -> Result<(), SimpleVectorError> {
//!     let mut vec = SimpleVector::<u8>::from_reserve(reserve(10))?;
//!
//!     for i in 0..10 {
//!         vec.push_back(i)?;
//!     }
//!
//!     // No reallocation happened
//!     assert_eq!(vec.capacity(), 10);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Logging
//!
//! Reallocations are reported through the [`log`](https://docs.rs/log) facade
//! at `trace` level, allocation failures at `debug` level.
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! simplevec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`SimpleVectorBehaviour`] to test error scenarios:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use simplevec::{SimpleVector, SimpleVectorBehaviour};
//!
//!     #[test]
//!     fn test_handles_allocation_failure() {
//!         let mut vec = SimpleVector::<u8>::new();
//!         vec.change_behaviour(SimpleVectorBehaviour::FailAtAllocation);
//!
//!         // Test that your code handles the error correctly
//!         assert!(vec.push_back(1).is_err());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;
mod error;
mod iter;
mod reserve;
mod simple_vector;

#[cfg(test)]
mod tests;

pub use error::SimpleVectorError;
pub use iter::IntoIter;
pub use reserve::{ReserveProxy, reserve};
pub use simple_vector::{GROWTH_FACTOR, MIN_NON_ZERO_CAPACITY, SimpleVector};
pub use simplevec_buffer::BufferError;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::SimpleVectorBehaviour;

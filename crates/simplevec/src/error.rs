// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for simplevec.
use simplevec_buffer::BufferError;
use thiserror::Error;

/// Error type for `SimpleVector` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SimpleVectorError {
    /// A checked access asked for an index outside `[0, size)`.
    ///
    /// The vector is left untouched.
    #[error("index {index} out of range for size {size}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The size of the vector at the time of the access.
        size: usize,
    },

    /// Growth or reservation could not obtain a new block.
    ///
    /// The vector keeps the size, capacity and contents it had before the call.
    #[error("AllocationError: {0}")]
    Alloc(#[from] BufferError),
}

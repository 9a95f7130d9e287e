// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for simplevec-buffer.
use thiserror::Error;

/// Errors that can occur while obtaining a block.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The requested element count does not fit in the address space.
    #[error("capacity overflow: block size would exceed isize::MAX bytes")]
    CapacityOverflow,

    /// The allocator could not provide a block of the requested capacity.
    #[error("allocation of {capacity} elements failed")]
    AllocationFailed {
        /// Number of elements that was requested.
        capacity: usize,
    },
}

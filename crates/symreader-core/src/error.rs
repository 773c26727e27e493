//! Error taxonomy of the interop layer.

use thiserror::Error;

use crate::hresult::HResult;

/// Failures surfaced by the interop routines.
///
/// Every error is reported to the immediate caller as-is; nothing here
/// retries or returns partial data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InteropError {
    /// The native call returned a non-benign negative status code.
    #[error("native call failed with HRESULT {0:#010x}")]
    NativeFailure(HResult),

    /// The fill call wrote a different number of items than the count call
    /// promised.
    #[error("read only {actual} of {expected} items")]
    IncompleteRead { actual: i32, expected: i32 },

    /// The native layer reported a negative item count.
    #[error("native reported invalid item count {0}")]
    InvalidCount(i32),

    /// Destination buffer cannot hold the packed characters plus the
    /// terminator.
    #[error("buffer of {capacity} characters cannot hold {needed}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

//! Shared error type for the framing pipeline.

use thiserror::Error;

/// Errors reported by the padding / framing layer.
///
/// Internal-integrity violations (padded length not a multiple of the block
/// or word size) are not represented here: those are logic defects and abort
/// the process via assertions instead of surfacing as recoverable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FramingError {
    /// The message bit-length does not fit the 64-bit length field of the
    /// SHA-256 padding scheme. Truncating would silently corrupt every
    /// downstream hardware test, so the message is rejected instead.
    #[error("message of {len} bytes overflows the 64-bit bit-length field")]
    MessageTooLong {
        /// Length of the rejected message in bytes.
        len: usize,
    },
}
